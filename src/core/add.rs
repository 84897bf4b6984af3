use crate::core::book::AppointmentBook;
use crate::core::context::BusinessContext;
use crate::core::notify::{Level, NotificationSink};
use crate::core::validator::{ValidationError, validate_with_conflicts};
use crate::errors::{AppError, AppResult};
use crate::models::{Appointment, Stylist};
use chrono::{NaiveDate, NaiveTime};

/// Field changes for an existing appointment; `None` keeps the value.
#[derive(Debug, Clone, Default)]
pub struct AppointmentPatch {
    pub title: Option<String>,
    pub stylist: Option<Stylist>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub duration: Option<u32>,
    pub is_walk_in: Option<bool>,
    pub service_id: Option<Option<String>>,
}

impl AppointmentPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.stylist.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.duration.is_none()
            && self.is_walk_in.is_none()
            && self.service_id.is_none()
    }

    fn apply(self, mut appt: Appointment) -> Appointment {
        if let Some(title) = self.title {
            appt.title = title;
        }
        if let Some(stylist) = self.stylist {
            appt.stylist = stylist;
        }
        if let Some(date) = self.date {
            appt.date = date;
        }
        if let Some(time) = self.time {
            appt.time = time;
        }
        if let Some(duration) = self.duration {
            appt.duration = duration;
        }
        if let Some(walk_in) = self.is_walk_in {
            appt.is_walk_in = walk_in;
        }
        if let Some(service_id) = self.service_id {
            appt.service_id = service_id;
        }
        appt
    }
}

/// The only way appointments enter or change in the book: every candidate
/// passes validation first, and a refused candidate leaves the book as it was.
pub struct AppointmentLogic;

impl AppointmentLogic {
    pub fn add(
        book: &mut AppointmentBook,
        ctx: &BusinessContext,
        appt: Appointment,
        sink: &dyn NotificationSink,
    ) -> AppResult<()> {
        Self::check(&appt, ctx, book, "add", sink)?;

        let msg = format!(
            "Booked '{}' on {} at {}-{} with {}.",
            appt.title,
            appt.date,
            appt.time_str(),
            appt.end_str(),
            stylist_label(&appt.stylist, ctx)
        );
        book.insert(appt)?;
        sink.notify(Level::Success, "add", &msg);
        Ok(())
    }

    pub fn edit(
        book: &mut AppointmentBook,
        ctx: &BusinessContext,
        id: &str,
        patch: AppointmentPatch,
        sink: &dyn NotificationSink,
    ) -> AppResult<Appointment> {
        let current = book
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::AppointmentNotFound(id.to_string()))?;

        let updated = patch.apply(current);
        Self::check(&updated, ctx, book, "edit", sink)?;

        let msg = format!(
            "Updated '{}' to {} at {}-{} with {}.",
            updated.title,
            updated.date,
            updated.time_str(),
            updated.end_str(),
            stylist_label(&updated.stylist, ctx)
        );
        book.update(updated.clone())?;
        sink.notify(Level::Success, "edit", &msg);
        Ok(updated)
    }

    /// Boundary checks, then the validator.
    fn check(
        appt: &Appointment,
        ctx: &BusinessContext,
        book: &AppointmentBook,
        operation: &str,
        sink: &dyn NotificationSink,
    ) -> AppResult<()> {
        if let Err(e) = appt.ensure_within_day() {
            sink.notify(Level::Error, operation, &e.to_string());
            return Err(e);
        }

        if let Some(service_id) = &appt.service_id
            && ctx.service(service_id).is_none()
        {
            return Err(AppError::ServiceNotFound(service_id.clone()));
        }

        let verdict = validate_with_conflicts(appt, ctx, book.items())
            .into_result()
            .map_err(|e| with_employee_name(e, ctx));

        if let Err(e) = verdict {
            sink.notify(Level::Error, operation, &e.to_string());
            return Err(e.into());
        }
        Ok(())
    }
}

fn stylist_label(stylist: &Stylist, ctx: &BusinessContext) -> String {
    match stylist {
        Stylist::Specific(id) => ctx.employee_name(id),
        Stylist::Unassigned => "anyone".to_string(),
    }
}

/// Conflict errors only carry the employee id; show the name instead.
fn with_employee_name(e: ValidationError, ctx: &BusinessContext) -> ValidationError {
    match e {
        ValidationError::SchedulingConflict {
            employee,
            title,
            start,
            end,
        } => ValidationError::SchedulingConflict {
            employee: ctx.employee_name(&employee),
            title,
            start,
            end,
        },
        other => other,
    }
}
