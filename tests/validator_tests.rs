use salonbook::core::validator::{
    ValidationError, ValidationResult, check_business_hours, check_exception_date,
    check_scheduling_conflict, validate_appointment, validate_with_conflicts,
};
use salonbook::models::{DayHours, ExceptionDate, OpeningHours};

mod common;
use common::{appt, appt_for, d, sample_context, t};

// 2025-03-03 is a Monday, 2025-03-04 a Tuesday, 2025-03-09 a Sunday.
const MONDAY: &str = "2025-03-03";
const TUESDAY: &str = "2025-03-04";
const SUNDAY: &str = "2025-03-09";

fn reason(result: ValidationResult) -> ValidationError {
    assert!(!result.is_valid, "expected a rejection");
    assert!(result.message.is_some());
    result.reason.expect("rejected result carries a reason")
}

#[test]
fn monday_1630_for_an_hour_is_outside_business_hours() {
    let mut ctx = sample_context();
    *ctx.week.get_mut(chrono::Weekday::Mon) = DayHours::open(t("09:00"), t("17:00"));

    let result = validate_appointment(&appt("a", MONDAY, "16:30", 60), &ctx);
    let message = result.message.clone().unwrap_or_default();

    assert!(matches!(reason(result), ValidationError::OutsideBusinessHours { .. }));
    assert!(message.contains("outside business hours"));
    assert!(message.contains("17:30"));
}

#[test]
fn closing_time_is_inclusive() {
    let mut ctx = sample_context();
    *ctx.week.get_mut(chrono::Weekday::Mon) = DayHours::open(t("09:00"), t("17:00"));

    assert!(validate_appointment(&appt("a", MONDAY, "09:00", 480), &ctx).is_valid);
    assert!(validate_appointment(&appt("b", MONDAY, "16:00", 60), &ctx).is_valid);

    let late = validate_appointment(&appt("c", MONDAY, "16:01", 60), &ctx);
    assert!(matches!(reason(late), ValidationError::OutsideBusinessHours { .. }));

    let early = validate_appointment(&appt("d", MONDAY, "08:59", 30), &ctx);
    assert!(matches!(reason(early), ValidationError::OutsideBusinessHours { .. }));
}

#[test]
fn closed_weekday_is_rejected() {
    let ctx = sample_context();
    let result = validate_appointment(&appt("a", SUNDAY, "10:00", 30), &ctx);

    assert_eq!(
        reason(result),
        ValidationError::ClosedOnDay { day: "sunday" }
    );
}

#[test]
fn exception_hours_override_weekly_closure() {
    let mut ctx = sample_context();
    ctx.exceptions.push(ExceptionDate::special_hours(
        d(SUNDAY),
        OpeningHours::new(t("10:00"), t("14:00")),
    ));

    assert!(validate_appointment(&appt("a", SUNDAY, "11:00", 60), &ctx).is_valid);
    assert!(validate_appointment(&appt("b", SUNDAY, "13:00", 60), &ctx).is_valid);

    let after = validate_appointment(&appt("c", SUNDAY, "13:30", 60), &ctx);
    assert!(matches!(
        reason(after),
        ValidationError::OutsideExceptionHours { .. }
    ));
}

#[test]
fn exception_hours_replace_rather_than_intersect() {
    let mut ctx = sample_context();
    // Monday is open 09-18; the exception moves it to 12-20.
    ctx.exceptions.push(ExceptionDate::special_hours(
        d(MONDAY),
        OpeningHours::new(t("12:00"), t("20:00")),
    ));

    assert!(validate_appointment(&appt("late", MONDAY, "19:00", 60), &ctx).is_valid);
    let morning = validate_appointment(&appt("early", MONDAY, "10:00", 30), &ctx);
    assert!(matches!(
        reason(morning),
        ValidationError::OutsideExceptionHours { .. }
    ));
}

#[test]
fn all_day_off_tuesday_rejects_everything() {
    let mut ctx = sample_context();
    ctx.exceptions.push(ExceptionDate::day_off(d(TUESDAY)));

    for (time, minutes) in [("09:00", 30), ("10:00", 60), ("17:30", 30)] {
        let result = validate_appointment(&appt("x", TUESDAY, time, minutes), &ctx);
        let message = result.message.clone().unwrap_or_default();
        assert_eq!(
            reason(result),
            ValidationError::ExceptionDayOff { date: d(TUESDAY) }
        );
        assert!(message.contains("Closed due to special hours"));
    }
}

#[test]
fn exception_check_passes_without_matching_date() {
    let exceptions = vec![ExceptionDate::day_off(d(TUESDAY))];
    assert!(check_exception_date(&appt("a", MONDAY, "10:00", 30), &exceptions).is_ok());
    assert!(check_exception_date(&appt("a", MONDAY, "10:00", 30), &[]).is_ok());
}

#[test]
fn weekly_check_alone_ignores_exceptions() {
    let ctx = sample_context();
    assert!(check_business_hours(&appt("a", MONDAY, "10:00", 30), &ctx.week).is_ok());
    assert!(check_business_hours(&appt("a", SUNDAY, "10:00", 30), &ctx.week).is_err());
}

#[test]
fn lunch_break_boundaries() {
    let ctx = sample_context();

    assert!(validate_appointment(&appt_for("a", "e1", MONDAY, "11:30", 30), &ctx).is_valid);
    assert!(validate_appointment(&appt_for("b", "e1", MONDAY, "13:00", 30), &ctx).is_valid);

    let spanning = validate_appointment(&appt_for("c", "e1", MONDAY, "11:55", 10), &ctx);
    assert!(matches!(
        reason(spanning),
        ValidationError::EmployeeOnLunchBreak { .. }
    ));
}

#[test]
fn booking_1145_for_30_minutes_hits_lunch() {
    let ctx = sample_context();
    let result = validate_appointment(&appt_for("a", "e1", MONDAY, "11:45", 30), &ctx);
    let message = result.message.clone().unwrap_or_default();

    assert!(matches!(
        reason(result),
        ValidationError::EmployeeOnLunchBreak { .. }
    ));
    assert!(message.contains("lunch break"));
    assert!(message.contains("Marta"));
}

#[test]
fn unassigned_skips_employee_schedule() {
    let ctx = sample_context();
    assert!(validate_appointment(&appt("a", MONDAY, "12:00", 60), &ctx).is_valid);
    assert!(validate_appointment(&appt("b", TUESDAY, "10:00", 30), &ctx).is_valid);
}

#[test]
fn employee_day_off_and_unknown_employee() {
    let ctx = sample_context();

    let off = validate_appointment(&appt_for("a", "e1", TUESDAY, "10:00", 30), &ctx);
    assert!(matches!(
        reason(off),
        ValidationError::EmployeeUnavailableOnDay { day: "tuesday", .. }
    ));

    let unknown = validate_appointment(&appt_for("b", "ghost", MONDAY, "10:00", 30), &ctx);
    assert!(matches!(
        reason(unknown),
        ValidationError::EmployeeUnavailableOnDay { .. }
    ));
}

#[test]
fn outside_employee_work_hours_even_when_business_is_open() {
    let ctx = sample_context();
    // Business closes at 18:00, Marta stops at 17:00.
    let result = validate_appointment(&appt_for("a", "e1", MONDAY, "17:00", 30), &ctx);
    assert!(matches!(
        reason(result),
        ValidationError::OutsideEmployeeWorkHours { .. }
    ));
    assert!(validate_appointment(&appt_for("b", "e1", MONDAY, "16:30", 30), &ctx).is_valid);
}

#[test]
fn business_hours_fail_before_employee_checks() {
    let ctx = sample_context();
    let result = validate_appointment(&appt_for("a", "e1", SUNDAY, "12:00", 60), &ctx);
    assert!(matches!(reason(result), ValidationError::ClosedOnDay { .. }));
}

#[test]
fn overlapping_booking_for_same_employee_conflicts() {
    let existing = vec![appt_for("x", "e1", MONDAY, "10:00", 60)];

    let clash = check_scheduling_conflict(&appt_for("y", "e1", MONDAY, "10:30", 30), &existing);
    assert!(matches!(clash, Err(ValidationError::SchedulingConflict { .. })));

    let inside = check_scheduling_conflict(&appt_for("y", "e1", MONDAY, "09:30", 120), &existing);
    assert!(inside.is_err());
}

#[test]
fn back_to_back_and_other_employees_do_not_conflict() {
    let existing = vec![
        appt_for("x", "e1", MONDAY, "10:00", 60),
        appt_for("z", "e2", MONDAY, "11:00", 60),
    ];

    assert!(check_scheduling_conflict(&appt_for("a", "e1", MONDAY, "11:00", 30), &existing).is_ok());
    assert!(check_scheduling_conflict(&appt_for("b", "e1", MONDAY, "09:00", 60), &existing).is_ok());
    assert!(check_scheduling_conflict(&appt_for("c", "e2", MONDAY, "10:00", 60), &existing).is_ok());
    assert!(check_scheduling_conflict(&appt_for("d", "e1", TUESDAY, "10:00", 60), &existing).is_ok());
    assert!(check_scheduling_conflict(&appt("e", MONDAY, "10:00", 60), &existing).is_ok());
}

#[test]
fn edited_appointment_does_not_conflict_with_itself() {
    let existing = vec![appt_for("x", "e1", MONDAY, "10:00", 60)];
    let moved = appt_for("x", "e1", MONDAY, "10:30", 60);
    assert!(check_scheduling_conflict(&moved, &existing).is_ok());
}

#[test]
fn full_validation_includes_conflicts() {
    let ctx = sample_context();
    let existing = vec![appt_for("x", "e1", MONDAY, "10:00", 60)];

    let result = validate_with_conflicts(&appt_for("y", "e1", MONDAY, "10:15", 30), &ctx, &existing);
    assert_eq!(
        result.reason.map(|r| r.kind()),
        Some("scheduling_conflict")
    );
    assert!(validate_with_conflicts(&appt_for("y", "e1", MONDAY, "11:00", 30), &ctx, &existing).is_valid);
}

#[test]
fn validation_result_from_ok_is_valid() {
    let result = ValidationResult::from(Ok::<(), ValidationError>(()));
    assert!(result.is_valid);
    assert!(result.message.is_none());
    assert!(result.into_result().is_ok());
}
