use super::serde_fmt::{hhmm, minutes_string};
use crate::errors::{AppError, AppResult};
use crate::utils::time::{MINUTES_PER_DAY, format_minutes, format_time, to_minutes};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage sentinel for an unassigned booking.
pub const ANYONE: &str = "anyone";

/// Who performs the appointment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stylist {
    Specific(String),
    /// Any available employee; the employee schedule is not checked.
    Unassigned,
}

impl Stylist {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ANYONE) {
            Stylist::Unassigned
        } else {
            Stylist::Specific(s.to_string())
        }
    }

    pub fn employee_id(&self) -> Option<&str> {
        match self {
            Stylist::Specific(id) => Some(id),
            Stylist::Unassigned => None,
        }
    }
}

impl From<String> for Stylist {
    fn from(s: String) -> Self {
        Stylist::parse(&s)
    }
}

impl From<Stylist> for String {
    fn from(s: Stylist) -> Self {
        match s {
            Stylist::Specific(id) => id,
            Stylist::Unassigned => ANYONE.to_string(),
        }
    }
}

impl fmt::Display for Stylist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stylist::Specific(id) => f.write_str(id),
            Stylist::Unassigned => f.write_str(ANYONE),
        }
    }
}

/// One booking. `date` carries the calendar day only; `time` is the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub stylist: Stylist,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    #[serde(with = "minutes_string")]
    pub duration: u32,
    #[serde(default)]
    pub is_walk_in: bool,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
}

impl Appointment {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        stylist: Stylist,
        date: NaiveDate,
        time: NaiveTime,
        duration: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            stylist,
            time,
            duration,
            is_walk_in: false,
            date,
            service_id: None,
        }
    }

    pub fn start_minutes(&self) -> u32 {
        to_minutes(self.time)
    }

    /// Saturates, so a corrupt stored duration cannot panic a render.
    pub fn end_minutes(&self) -> u32 {
        self.start_minutes().saturating_add(self.duration)
    }

    /// Half-open interval overlap: touching appointments do not overlap.
    pub fn overlaps(&self, other: &Appointment) -> bool {
        self.start_minutes() < other.end_minutes() && self.end_minutes() > other.start_minutes()
    }

    /// Reject non-positive durations and bookings running past midnight.
    pub fn ensure_within_day(&self) -> AppResult<()> {
        if self.duration == 0 {
            return Err(AppError::InvalidDuration(format!(
                "{} min (must be positive)",
                self.duration
            )));
        }
        let end = self.start_minutes().checked_add(self.duration);
        if self.duration > MINUTES_PER_DAY || end.is_none_or(|end| end > MINUTES_PER_DAY) {
            return Err(AppError::CrossesMidnight {
                start: format_time(self.time),
                minutes: self.duration,
            });
        }
        Ok(())
    }

    pub fn time_str(&self) -> String {
        format_time(self.time)
    }

    pub fn end_str(&self) -> String {
        format_minutes(self.end_minutes())
    }
}
