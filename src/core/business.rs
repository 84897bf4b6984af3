use crate::core::context::BusinessContext;
use crate::core::notify::{Level, NotificationSink};
use crate::errors::{AppError, AppResult};
use crate::models::{DayHours, DaySchedule, Employee, ExceptionDate, OpeningHours, Service};
use crate::utils::date::weekday_key;
use crate::utils::time::format_time;
use chrono::{NaiveDate, NaiveTime, Weekday};

/// Edits to the business configuration. The validator only reads what
/// these functions write.
pub struct BusinessLogic;

fn ensure_ordered(open: NaiveTime, close: NaiveTime, what: &str) -> AppResult<()> {
    if open >= close {
        return Err(AppError::InvalidInput(format!(
            "{what}: opening {} must be before closing {}",
            format_time(open),
            format_time(close)
        )));
    }
    Ok(())
}

impl BusinessLogic {
    pub fn set_day_hours(
        ctx: &mut BusinessContext,
        day: Weekday,
        open: NaiveTime,
        close: NaiveTime,
        sink: &dyn NotificationSink,
    ) -> AppResult<()> {
        ensure_ordered(open, close, weekday_key(day))?;
        *ctx.week.get_mut(day) = DayHours::open(open, close);

        sink.notify(
            Level::Success,
            "hours",
            &format!(
                "Business hours for {}: {}-{}.",
                weekday_key(day),
                format_time(open),
                format_time(close)
            ),
        );
        Ok(())
    }

    pub fn close_day(ctx: &mut BusinessContext, day: Weekday, sink: &dyn NotificationSink) {
        ctx.week.get_mut(day).is_open = false;
        sink.notify(
            Level::Success,
            "hours",
            &format!("Business closed on {}.", weekday_key(day)),
        );
    }

    pub fn add_employee(
        ctx: &mut BusinessContext,
        employee: Employee,
        sink: &dyn NotificationSink,
    ) -> AppResult<()> {
        if ctx.employee(&employee.id).is_some() {
            return Err(AppError::DuplicateId(employee.id));
        }
        let msg = format!("Employee '{}' added (id {}).", employee.name, employee.id);
        ctx.employees.push(employee);
        sink.notify(Level::Success, "employee", &msg);
        Ok(())
    }

    /// Existing bookings keep their stylist id and will fail validation on edit.
    pub fn remove_employee(
        ctx: &mut BusinessContext,
        id: &str,
        sink: &dyn NotificationSink,
    ) -> AppResult<Employee> {
        let idx = ctx
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))?;
        let removed = ctx.employees.remove(idx);
        sink.notify(
            Level::Success,
            "employee",
            &format!("Employee '{}' removed.", removed.name),
        );
        Ok(removed)
    }

    /// Replace one weekday of an employee's schedule. A working day must be
    /// ordered (`work_start <= lunch_start <= lunch_end <= work_end`) and
    /// fit inside that weekday's business hours.
    pub fn set_employee_day(
        ctx: &mut BusinessContext,
        id: &str,
        day: Weekday,
        schedule: DaySchedule,
        sink: &dyn NotificationSink,
    ) -> AppResult<()> {
        if schedule.is_available {
            ensure_ordered(schedule.work_start, schedule.work_end, "work hours")?;
            if !schedule.is_well_ordered() {
                return Err(AppError::InvalidInput(
                    "lunch break must lie within the working hours".into(),
                ));
            }

            let business = ctx.week.get(day);
            if !business.is_open {
                return Err(AppError::InvalidInput(format!(
                    "business is closed on {}",
                    weekday_key(day)
                )));
            }
            if schedule.work_start < business.open_time || schedule.work_end > business.close_time
            {
                return Err(AppError::InvalidInput(format!(
                    "work hours must lie within business hours ({})",
                    business.hours().label()
                )));
            }
        }

        let employee = ctx
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))?;

        let msg = if schedule.is_available {
            format!(
                "{} works {} {}-{} (lunch {}-{}).",
                employee.name,
                weekday_key(day),
                format_time(schedule.work_start),
                format_time(schedule.work_end),
                format_time(schedule.lunch_start),
                format_time(schedule.lunch_end)
            )
        } else {
            format!("{} is off on {}.", employee.name, weekday_key(day))
        };

        *employee.schedule.get_mut(day) = schedule;
        sink.notify(Level::Success, "schedule", &msg);
        Ok(())
    }

    pub fn add_service(
        ctx: &mut BusinessContext,
        service: Service,
        sink: &dyn NotificationSink,
    ) -> AppResult<()> {
        if ctx.service(&service.id).is_some() {
            return Err(AppError::DuplicateId(service.id));
        }
        if service.duration_minutes == 0 {
            return Err(AppError::InvalidDuration(
                "service duration must be positive".into(),
            ));
        }
        if service.price_eur.is_nan() || service.price_eur < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "price must be non-negative, got {}",
                service.price_eur
            )));
        }

        let msg = format!(
            "Service '{}' added ({} min, {:.2} EUR).",
            service.name, service.duration_minutes, service.price_eur
        );
        ctx.services.push(service);
        sink.notify(Level::Success, "service", &msg);
        Ok(())
    }

    pub fn remove_service(
        ctx: &mut BusinessContext,
        id: &str,
        sink: &dyn NotificationSink,
    ) -> AppResult<Service> {
        let idx = ctx
            .services
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::ServiceNotFound(id.to_string()))?;
        let removed = ctx.services.remove(idx);
        sink.notify(
            Level::Success,
            "service",
            &format!("Service '{}' removed.", removed.name),
        );
        Ok(removed)
    }

    /// Insert or replace the exception for its date (one per date).
    pub fn set_exception(
        ctx: &mut BusinessContext,
        exception: ExceptionDate,
        sink: &dyn NotificationSink,
    ) -> AppResult<()> {
        let msg = match (exception.is_all_day_off, exception.hours) {
            (true, _) => format!("{} marked as closed.", exception.date),
            (false, Some(OpeningHours { open, close })) => {
                ensure_ordered(open, close, "special hours")?;
                format!(
                    "Special hours on {}: {}-{}.",
                    exception.date,
                    format_time(open),
                    format_time(close)
                )
            }
            (false, None) => {
                return Err(AppError::InvalidInput(
                    "an exception needs either --off or both --open and --close".into(),
                ));
            }
        };

        ctx.exceptions.retain(|e| e.date != exception.date);
        ctx.exceptions.push(exception);
        ctx.exceptions.sort_by_key(|e| e.date);
        sink.notify(Level::Success, "exception", &msg);
        Ok(())
    }

    pub fn remove_exception(
        ctx: &mut BusinessContext,
        date: NaiveDate,
        sink: &dyn NotificationSink,
    ) -> AppResult<()> {
        let before = ctx.exceptions.len();
        ctx.exceptions.retain(|e| e.date != date);
        if ctx.exceptions.len() == before {
            return Err(AppError::ExceptionNotFound(date.to_string()));
        }
        sink.notify(
            Level::Success,
            "exception",
            &format!("Exception for {date} removed."),
        );
        Ok(())
    }
}
