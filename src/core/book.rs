use crate::errors::{AppError, AppResult};
use crate::models::Appointment;
use chrono::NaiveDate;

/// Caller-owned appointment collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentBook {
    items: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new(items: Vec<Appointment>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Appointment] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.items.iter().find(|a| a.id == id)
    }

    pub fn insert(&mut self, appt: Appointment) -> AppResult<()> {
        if self.get(&appt.id).is_some() {
            return Err(AppError::DuplicateId(appt.id));
        }
        self.items.push(appt);
        Ok(())
    }

    /// Replace the appointment with the same id; returns the old value.
    pub fn update(&mut self, appt: Appointment) -> AppResult<Appointment> {
        let slot = self
            .items
            .iter_mut()
            .find(|a| a.id == appt.id)
            .ok_or_else(|| AppError::AppointmentNotFound(appt.id.clone()))?;
        Ok(std::mem::replace(slot, appt))
    }

    pub fn remove(&mut self, id: &str) -> AppResult<Appointment> {
        let idx = self
            .items
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| AppError::AppointmentNotFound(id.to_string()))?;
        Ok(self.items.remove(idx))
    }

    /// Appointments on `date`, ordered by start time.
    pub fn for_date(&self, date: NaiveDate) -> Vec<Appointment> {
        let mut day: Vec<Appointment> = self
            .items
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect();
        day.sort_by_key(|a| (a.time, a.id.clone()));
        day
    }

    pub fn for_dates(&self, dates: &[NaiveDate]) -> Vec<Appointment> {
        let mut out: Vec<Appointment> = self
            .items
            .iter()
            .filter(|a| dates.contains(&a.date))
            .cloned()
            .collect();
        out.sort_by_key(|a| (a.date, a.time, a.id.clone()));
        out
    }
}
