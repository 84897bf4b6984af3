//! Availability validation for candidate appointments.
//!
//! Checks run in a fixed order and stop at the first failure:
//! opening hours (an exception date for the day replaces the weekly
//! schedule), then the assigned employee's day schedule, then, for
//! callers holding the appointment list, overlaps with the employee's
//! other bookings.

use crate::core::context::BusinessContext;
use crate::models::exception::find_for_date;
use crate::models::{Appointment, Employee, ExceptionDate, Stylist, WeekSchedule};
use crate::utils::date::weekday_key;
use crate::utils::time::{format_minutes, format_time, to_minutes};
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Why a booking was refused. Every variant is recoverable by the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Business closed on this day ({day})")]
    ClosedOnDay { day: &'static str },

    #[error("Appointment {start}-{end} is outside business hours ({hours})")]
    OutsideBusinessHours {
        start: String,
        end: String,
        hours: String,
    },

    #[error("Closed due to special hours on {date}")]
    ExceptionDayOff { date: NaiveDate },

    #[error("Appointment {start}-{end} is outside the special hours for {date} ({hours})")]
    OutsideExceptionHours {
        date: NaiveDate,
        start: String,
        end: String,
        hours: String,
    },

    #[error("{employee} is not available on {day}")]
    EmployeeUnavailableOnDay { employee: String, day: &'static str },

    #[error("Appointment {start}-{end} is outside {employee}'s working hours ({hours})")]
    OutsideEmployeeWorkHours {
        employee: String,
        start: String,
        end: String,
        hours: String,
    },

    #[error("Appointment {start}-{end} overlaps {employee}'s lunch break ({hours})")]
    EmployeeOnLunchBreak {
        employee: String,
        start: String,
        end: String,
        hours: String,
    },

    #[error("{employee} already has '{title}' booked at {start}-{end}")]
    SchedulingConflict {
        employee: String,
        title: String,
        start: String,
        end: String,
    },
}

impl ValidationError {
    /// Stable name of the failure kind, used in the log table.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::ClosedOnDay { .. } => "closed_on_day",
            ValidationError::OutsideBusinessHours { .. } => "outside_business_hours",
            ValidationError::ExceptionDayOff { .. } => "exception_day_off",
            ValidationError::OutsideExceptionHours { .. } => "outside_exception_hours",
            ValidationError::EmployeeUnavailableOnDay { .. } => "employee_unavailable_on_day",
            ValidationError::OutsideEmployeeWorkHours { .. } => "outside_employee_work_hours",
            ValidationError::EmployeeOnLunchBreak { .. } => "employee_on_lunch_break",
            ValidationError::SchedulingConflict { .. } => "scheduling_conflict",
        }
    }
}

/// Pass/fail outcome with a user-facing message on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: Option<String>,
    pub reason: Option<ValidationError>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
            reason: None,
        }
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.reason {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(r: Result<(), ValidationError>) -> Self {
        match r {
            Ok(()) => Self::valid(),
            Err(e) => Self {
                is_valid: false,
                message: Some(e.to_string()),
                reason: Some(e),
            },
        }
    }
}

fn span(appt: &Appointment) -> (String, String) {
    (format_time(appt.time), format_minutes(appt.end_minutes()))
}

/// Weekly schedule: the weekday must be open and `[start, end]` must sit
/// inside `[open, close]`. Ending exactly at closing time is allowed.
pub fn check_business_hours(appt: &Appointment, week: &WeekSchedule) -> Result<(), ValidationError> {
    let weekday = appt.date.weekday();
    let day = week.get(weekday);

    if !day.is_open {
        return Err(ValidationError::ClosedOnDay {
            day: weekday_key(weekday),
        });
    }

    let hours = day.hours();
    if !hours.contains(appt.start_minutes(), appt.end_minutes()) {
        let (start, end) = span(appt);
        return Err(ValidationError::OutsideBusinessHours {
            start,
            end,
            hours: hours.label(),
        });
    }
    Ok(())
}

/// Exception override for the appointment's date. Passes when no
/// exception exists; exception hours replace the weekly bounds.
pub fn check_exception_date(
    appt: &Appointment,
    exceptions: &[ExceptionDate],
) -> Result<(), ValidationError> {
    let Some(exception) = find_for_date(exceptions, appt.date) else {
        return Ok(());
    };

    if exception.is_all_day_off {
        return Err(ValidationError::ExceptionDayOff { date: appt.date });
    }

    if let Some(hours) = exception.hours
        && !hours.contains(appt.start_minutes(), appt.end_minutes())
    {
        let (start, end) = span(appt);
        return Err(ValidationError::OutsideExceptionHours {
            date: appt.date,
            start,
            end,
            hours: hours.label(),
        });
    }
    Ok(())
}

/// Opening-hours gate: an exception that closes the day or carries its own
/// hours takes the place of the weekly schedule for that date.
pub fn check_opening_hours(appt: &Appointment, ctx: &BusinessContext) -> Result<(), ValidationError> {
    match find_for_date(&ctx.exceptions, appt.date) {
        Some(e) if e.is_all_day_off || e.hours.is_some() => {
            check_exception_date(appt, &ctx.exceptions)
        }
        _ => check_business_hours(appt, &ctx.week),
    }
}

/// Employee day schedule. Skipped for unassigned bookings.
pub fn check_employee_availability(
    appt: &Appointment,
    employees: &[Employee],
) -> Result<(), ValidationError> {
    let Stylist::Specific(id) = &appt.stylist else {
        return Ok(());
    };
    let weekday = appt.date.weekday();

    let Some(employee) = employees.iter().find(|e| e.id == *id) else {
        return Err(ValidationError::EmployeeUnavailableOnDay {
            employee: id.clone(),
            day: weekday_key(weekday),
        });
    };

    let schedule = employee.day(weekday);
    if !schedule.is_available {
        return Err(ValidationError::EmployeeUnavailableOnDay {
            employee: employee.name.clone(),
            day: weekday_key(weekday),
        });
    }

    let (start, end) = (appt.start_minutes(), appt.end_minutes());

    if start < to_minutes(schedule.work_start) || end > to_minutes(schedule.work_end) {
        let (s, e) = span(appt);
        return Err(ValidationError::OutsideEmployeeWorkHours {
            employee: employee.name.clone(),
            start: s,
            end: e,
            hours: format!(
                "{}-{}",
                format_time(schedule.work_start),
                format_time(schedule.work_end)
            ),
        });
    }

    // open interval: touching the lunch break is fine
    if start < to_minutes(schedule.lunch_end) && end > to_minutes(schedule.lunch_start) {
        let (s, e) = span(appt);
        return Err(ValidationError::EmployeeOnLunchBreak {
            employee: employee.name.clone(),
            start: s,
            end: e,
            hours: format!(
                "{}-{}",
                format_time(schedule.lunch_start),
                format_time(schedule.lunch_end)
            ),
        });
    }
    Ok(())
}

/// Overlap with the same employee's other bookings on that date.
/// `candidate.id` is excluded so an edit does not collide with itself.
pub fn check_scheduling_conflict(
    candidate: &Appointment,
    existing: &[Appointment],
) -> Result<(), ValidationError> {
    let Some(employee) = candidate.stylist.employee_id() else {
        return Ok(());
    };

    let clash = existing.iter().find(|other| {
        other.id != candidate.id
            && other.date == candidate.date
            && other.stylist == candidate.stylist
            && candidate.overlaps(other)
    });

    match clash {
        Some(other) => Err(ValidationError::SchedulingConflict {
            employee: employee.to_string(),
            title: other.title.clone(),
            start: other.time_str(),
            end: other.end_str(),
        }),
        None => Ok(()),
    }
}

/// Opening hours, exception date and employee schedule, in that order.
pub fn validate_appointment(appt: &Appointment, ctx: &BusinessContext) -> ValidationResult {
    check_opening_hours(appt, ctx)
        .and_then(|_| check_employee_availability(appt, &ctx.employees))
        .into()
}

/// [`validate_appointment`] followed by the scheduling-conflict check.
pub fn validate_with_conflicts(
    appt: &Appointment,
    ctx: &BusinessContext,
    existing: &[Appointment],
) -> ValidationResult {
    check_opening_hours(appt, ctx)
        .and_then(|_| check_employee_availability(appt, &ctx.employees))
        .and_then(|_| check_scheduling_conflict(appt, existing))
        .into()
}
