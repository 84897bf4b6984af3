use crate::core::book::AppointmentBook;
use crate::core::notify::{Level, NotificationSink};
use crate::errors::AppResult;
use crate::models::Appointment;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove one appointment by id. Deleting never needs validation.
    pub fn apply(
        book: &mut AppointmentBook,
        id: &str,
        sink: &dyn NotificationSink,
    ) -> AppResult<Appointment> {
        let removed = book.remove(id)?;

        sink.notify(
            Level::Success,
            "del",
            &format!(
                "Deleted '{}' on {} at {}.",
                removed.title,
                removed.date,
                removed.time_str()
            ),
        );
        Ok(removed)
    }
}
