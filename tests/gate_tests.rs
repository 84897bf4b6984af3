use salonbook::core::add::{AppointmentLogic, AppointmentPatch};
use salonbook::core::book::AppointmentBook;
use salonbook::core::business::BusinessLogic;
use salonbook::core::del::DeleteLogic;
use salonbook::core::notify::{Level, MemorySink};
use salonbook::core::validator::ValidationError;
use salonbook::errors::AppError;
use salonbook::models::{
    DaySchedule, Employee, ExceptionDate, OpeningHours, Service, ServiceCategory, ServiceIcon,
};

mod common;
use common::{appt, appt_for, d, sample_context, t};

const MONDAY: &str = "2025-03-03";

#[test]
fn valid_booking_is_added_and_reported() {
    let ctx = sample_context();
    let mut book = AppointmentBook::default();
    let sink = MemorySink::new();

    AppointmentLogic::add(&mut book, &ctx, appt_for("a", "e1", MONDAY, "10:00", 60), &sink).unwrap();

    assert_eq!(book.items().len(), 1);
    let notices = sink.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, Level::Success);
    assert_eq!(notices[0].operation, "add");
}

#[test]
fn rejected_booking_leaves_the_book_unchanged() {
    let ctx = sample_context();
    let mut book = AppointmentBook::new(vec![appt_for("a", "e1", MONDAY, "10:00", 60)]);
    let before = book.clone();
    let sink = MemorySink::new();

    let err = AppointmentLogic::add(&mut book, &ctx, appt_for("b", "e1", MONDAY, "11:45", 30), &sink)
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Validation(ValidationError::EmployeeOnLunchBreak { .. })
    ));
    assert_eq!(book, before);
    assert_eq!(sink.notices()[0].level, Level::Error);
}

#[test]
fn conflicts_name_the_employee() {
    let ctx = sample_context();
    let mut book = AppointmentBook::new(vec![appt_for("a", "e1", MONDAY, "10:00", 60)]);
    let sink = MemorySink::new();

    let err = AppointmentLogic::add(&mut book, &ctx, appt_for("b", "e1", MONDAY, "10:30", 30), &sink)
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Marta"), "{message}");
    assert!(message.contains("10:00-11:00"), "{message}");
    assert_eq!(book.items().len(), 1);
}

#[test]
fn unassigned_bookings_may_overlap() {
    let ctx = sample_context();
    let mut book = AppointmentBook::default();
    let sink = MemorySink::new();

    AppointmentLogic::add(&mut book, &ctx, appt("a", MONDAY, "10:00", 60), &sink).unwrap();
    AppointmentLogic::add(&mut book, &ctx, appt("b", MONDAY, "10:00", 60), &sink).unwrap();
    assert_eq!(book.items().len(), 2);
}

#[test]
fn duplicate_id_is_refused() {
    let ctx = sample_context();
    let mut book = AppointmentBook::new(vec![appt("a", MONDAY, "10:00", 60)]);
    let sink = MemorySink::new();

    let err = AppointmentLogic::add(&mut book, &ctx, appt("a", MONDAY, "14:00", 30), &sink).unwrap_err();
    assert!(matches!(err, AppError::DuplicateId(_)));
}

#[test]
fn bad_durations_are_refused_before_validation() {
    let mut ctx = sample_context();
    ctx.exceptions.push(ExceptionDate::special_hours(
        d(MONDAY),
        OpeningHours::new(t("09:00"), t("23:59")),
    ));
    let mut book = AppointmentBook::default();
    let sink = MemorySink::new();

    let zero = AppointmentLogic::add(&mut book, &ctx, appt("z", MONDAY, "10:00", 0), &sink);
    assert!(matches!(zero, Err(AppError::InvalidDuration(_))));

    let late = AppointmentLogic::add(&mut book, &ctx, appt("m", MONDAY, "23:30", 60), &sink);
    assert!(matches!(late, Err(AppError::CrossesMidnight { .. })));
    assert!(book.items().is_empty());
}

#[test]
fn huge_durations_do_not_wrap_past_midnight() {
    let ctx = sample_context();
    let mut book = AppointmentBook::default();
    let sink = MemorySink::new();

    let huge = appt("h", MONDAY, "10:00", u32::MAX);
    assert_eq!(huge.end_minutes(), u32::MAX);

    let res = AppointmentLogic::add(&mut book, &ctx, huge, &sink);
    assert!(matches!(res, Err(AppError::CrossesMidnight { .. })));

    let day_long = AppointmentLogic::add(&mut book, &ctx, appt("d", MONDAY, "00:00", 1441), &sink);
    assert!(matches!(day_long, Err(AppError::CrossesMidnight { .. })));
    assert!(book.items().is_empty());
}

#[test]
fn unknown_service_is_refused() {
    let ctx = sample_context();
    let mut book = AppointmentBook::default();
    let mut a = appt("a", MONDAY, "10:00", 30);
    a.service_id = Some("nope".into());

    let err = AppointmentLogic::add(&mut book, &ctx, a, &MemorySink::new()).unwrap_err();
    assert!(matches!(err, AppError::ServiceNotFound(_)));
}

#[test]
fn edit_revalidates_and_excludes_itself() {
    let ctx = sample_context();
    let mut book = AppointmentBook::new(vec![
        appt_for("a", "e1", MONDAY, "10:00", 60),
        appt_for("b", "e1", MONDAY, "14:00", 60),
    ]);
    let sink = MemorySink::new();

    // Shifting within its own slot is fine.
    let moved = AppointmentLogic::edit(
        &mut book,
        &ctx,
        "a",
        AppointmentPatch {
            time: Some(t("10:30")),
            ..AppointmentPatch::default()
        },
        &sink,
    )
    .unwrap();
    assert_eq!(moved.time, t("10:30"));

    // Moving onto b is not.
    let before = book.clone();
    let err = AppointmentLogic::edit(
        &mut book,
        &ctx,
        "a",
        AppointmentPatch {
            time: Some(t("14:30")),
            duration: Some(30),
            ..AppointmentPatch::default()
        },
        &sink,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::SchedulingConflict { .. })
    ));
    assert_eq!(book, before);

    let missing = AppointmentLogic::edit(&mut book, &ctx, "x", AppointmentPatch::default(), &sink);
    assert!(matches!(missing, Err(AppError::AppointmentNotFound(_))));
}

#[test]
fn edit_can_clear_the_service() {
    let mut ctx = sample_context();
    ctx.services.push(Service {
        id: "cut".into(),
        name: "Haircut".into(),
        icon: ServiceIcon::Scissors,
        duration_minutes: 45,
        price_eur: 25.0,
        category: ServiceCategory::Haircuts,
    });
    let mut a = appt("a", MONDAY, "10:00", 45);
    a.service_id = Some("cut".into());
    let mut book = AppointmentBook::new(vec![a]);

    let patch = AppointmentPatch {
        service_id: Some(None),
        is_walk_in: Some(true),
        ..AppointmentPatch::default()
    };
    assert!(!patch.is_empty());
    let updated = AppointmentLogic::edit(&mut book, &ctx, "a", patch, &MemorySink::new()).unwrap();
    assert_eq!(updated.service_id, None);
    assert!(updated.is_walk_in);
}

#[test]
fn delete_removes_and_reports() {
    let mut book = AppointmentBook::new(vec![appt("a", MONDAY, "10:00", 60)]);
    let sink = MemorySink::new();

    let removed = DeleteLogic::apply(&mut book, "a", &sink).unwrap();
    assert_eq!(removed.id, "a");
    assert!(book.items().is_empty());
    assert_eq!(sink.notices()[0].operation, "del");

    assert!(matches!(
        DeleteLogic::apply(&mut book, "a", &sink),
        Err(AppError::AppointmentNotFound(_))
    ));
}

#[test]
fn employee_schedule_must_fit_business_hours() {
    let mut ctx = sample_context();
    let sink = MemorySink::new();
    let mon = chrono::Weekday::Mon;

    let too_late = DaySchedule::working(t("09:00"), t("19:00"), t("12:00"), t("13:00"));
    assert!(BusinessLogic::set_employee_day(&mut ctx, "e1", mon, too_late, &sink).is_err());

    let lunch_outside = DaySchedule::working(t("10:00"), t("16:00"), t("09:00"), t("09:30"));
    assert!(BusinessLogic::set_employee_day(&mut ctx, "e1", mon, lunch_outside, &sink).is_err());

    let sunday = DaySchedule::working(t("10:00"), t("12:00"), t("11:00"), t("11:00"));
    assert!(
        BusinessLogic::set_employee_day(&mut ctx, "e1", chrono::Weekday::Sun, sunday, &sink).is_err()
    );

    let ok = DaySchedule::working(t("10:00"), t("16:00"), t("13:00"), t("13:30"));
    BusinessLogic::set_employee_day(&mut ctx, "e1", mon, ok.clone(), &sink).unwrap();
    assert_eq!(ctx.employee("e1").unwrap().day(mon), &ok);

    let off = BusinessLogic::set_employee_day(&mut ctx, "ghost", mon, DaySchedule::day_off(), &sink);
    assert!(matches!(off, Err(AppError::EmployeeNotFound(_))));
}

#[test]
fn employees_and_services_are_managed_by_id() {
    let mut ctx = sample_context();
    let sink = MemorySink::new();

    assert!(matches!(
        Employee::new("e2", "Luca", "red"),
        Err(AppError::InvalidColor(_))
    ));
    let luca = Employee::new("e2", "Luca", "#ABCDEF").unwrap();
    assert_eq!(luca.color, "#abcdef");
    BusinessLogic::add_employee(&mut ctx, luca.clone(), &sink).unwrap();
    assert!(matches!(
        BusinessLogic::add_employee(&mut ctx, luca, &sink),
        Err(AppError::DuplicateId(_))
    ));
    BusinessLogic::remove_employee(&mut ctx, "e2", &sink).unwrap();
    assert!(ctx.employee("e2").is_none());

    let mut svc = Service {
        id: "s1".into(),
        name: "Blow dry".into(),
        icon: ServiceIcon::Sparkles,
        duration_minutes: 0,
        price_eur: 20.0,
        category: ServiceCategory::Styling,
    };
    assert!(BusinessLogic::add_service(&mut ctx, svc.clone(), &sink).is_err());
    svc.duration_minutes = 30;
    svc.price_eur = -1.0;
    assert!(BusinessLogic::add_service(&mut ctx, svc.clone(), &sink).is_err());
    svc.price_eur = 20.0;
    BusinessLogic::add_service(&mut ctx, svc, &sink).unwrap();
    assert_eq!(ctx.service("s1").map(|s| s.duration_minutes), Some(30));
    BusinessLogic::remove_service(&mut ctx, "s1", &sink).unwrap();
    assert!(ctx.services.is_empty());
}

#[test]
fn one_exception_per_date() {
    let mut ctx = sample_context();
    let sink = MemorySink::new();
    let xmas = d("2025-12-25");

    BusinessLogic::set_exception(&mut ctx, ExceptionDate::day_off(xmas), &sink).unwrap();
    BusinessLogic::set_exception(
        &mut ctx,
        ExceptionDate::special_hours(xmas, OpeningHours::new(t("10:00"), t("12:00"))),
        &sink,
    )
    .unwrap();
    assert_eq!(ctx.exceptions.len(), 1);
    assert!(!ctx.exceptions[0].is_all_day_off);

    let empty = ExceptionDate {
        date: d("2025-12-26"),
        is_all_day_off: false,
        hours: None,
    };
    assert!(BusinessLogic::set_exception(&mut ctx, empty, &sink).is_err());

    let reversed = ExceptionDate::special_hours(
        d("2025-12-27"),
        OpeningHours::new(t("12:00"), t("10:00")),
    );
    assert!(BusinessLogic::set_exception(&mut ctx, reversed, &sink).is_err());

    BusinessLogic::remove_exception(&mut ctx, xmas, &sink).unwrap();
    assert!(matches!(
        BusinessLogic::remove_exception(&mut ctx, xmas, &sink),
        Err(AppError::ExceptionNotFound(_))
    ));
}

#[test]
fn closing_a_weekday_blocks_bookings() {
    let mut ctx = sample_context();
    let sink = MemorySink::new();
    BusinessLogic::close_day(&mut ctx, chrono::Weekday::Mon, &sink);

    let mut book = AppointmentBook::default();
    let err = AppointmentLogic::add(&mut book, &ctx, appt("a", MONDAY, "10:00", 30), &sink).unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::ClosedOnDay { .. })
    ));

    BusinessLogic::set_day_hours(&mut ctx, chrono::Weekday::Mon, t("08:00"), t("12:00"), &sink).unwrap();
    AppointmentLogic::add(&mut book, &ctx, appt("a", MONDAY, "08:00", 30), &sink).unwrap();
    assert!(
        BusinessLogic::set_day_hours(&mut ctx, chrono::Weekday::Mon, t("12:00"), t("08:00"), &sink)
            .is_err()
    );
}
