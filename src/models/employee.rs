use super::serde_fmt::hhmm;
use super::week::Week;
use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("static color pattern")
});

/// Working window and lunch break of one employee on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub is_available: bool,
    #[serde(with = "hhmm")]
    pub work_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub work_end: NaiveTime,
    #[serde(with = "hhmm")]
    pub lunch_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub lunch_end: NaiveTime,
}

impl DaySchedule {
    pub fn working(
        work_start: NaiveTime,
        work_end: NaiveTime,
        lunch_start: NaiveTime,
        lunch_end: NaiveTime,
    ) -> Self {
        Self {
            is_available: true,
            work_start,
            work_end,
            lunch_start,
            lunch_end,
        }
    }

    pub fn day_off() -> Self {
        Self {
            is_available: false,
            ..Self::default_working()
        }
    }

    fn default_working() -> Self {
        let hm = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN);
        Self::working(hm(9), hm(18), hm(12), hm(13))
    }

    /// `workStart <= lunchStart <= lunchEnd <= workEnd`
    pub fn is_well_ordered(&self) -> bool {
        self.work_start <= self.lunch_start
            && self.lunch_start <= self.lunch_end
            && self.lunch_end <= self.work_end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// Hex color used to tag this employee's bookings.
    pub color: String,
    pub schedule: Week<DaySchedule>,
}

impl Default for Week<DaySchedule> {
    /// Mon-Fri 09:00-18:00 with lunch 12:00-13:00, weekend off.
    fn default() -> Self {
        Week::from_fn(|day| match day {
            Weekday::Sat | Weekday::Sun => DaySchedule::day_off(),
            _ => DaySchedule::default_working(),
        })
    }
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: &str) -> AppResult<Self> {
        if !HEX_COLOR.is_match(color) {
            return Err(AppError::InvalidColor(color.to_string()));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            color: color.to_lowercase(),
            schedule: Week::default(),
        })
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        self.schedule.get(day)
    }
}
