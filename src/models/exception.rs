use super::business::OpeningHours;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One-off override of the weekly hours for a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionDate {
    pub date: NaiveDate,
    pub is_all_day_off: bool,
    /// Replacement hours; only meaningful when not all-day-off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<OpeningHours>,
}

impl ExceptionDate {
    pub fn day_off(date: NaiveDate) -> Self {
        Self {
            date,
            is_all_day_off: true,
            hours: None,
        }
    }

    pub fn special_hours(date: NaiveDate, hours: OpeningHours) -> Self {
        Self {
            date,
            is_all_day_off: false,
            hours: Some(hours),
        }
    }
}

/// Exact date lookup; at most one exception exists per date.
pub fn find_for_date(exceptions: &[ExceptionDate], date: NaiveDate) -> Option<&ExceptionDate> {
    exceptions.iter().find(|e| e.date == date)
}
