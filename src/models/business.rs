use super::serde_fmt::hhmm;
use super::week::Week;
use crate::utils::time::{format_time, to_minutes};
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Regular opening hours for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    pub is_open: bool,
    #[serde(with = "hhmm")]
    pub open_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub close_time: NaiveTime,
}

impl DayHours {
    pub fn open(open_time: NaiveTime, close_time: NaiveTime) -> Self {
        Self {
            is_open: true,
            open_time,
            close_time,
        }
    }

    pub fn hours(&self) -> OpeningHours {
        OpeningHours::new(self.open_time, self.close_time)
    }
}

/// An open/close pair. Both bounds always exist together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(with = "hhmm")]
    pub open: NaiveTime,
    #[serde(with = "hhmm")]
    pub close: NaiveTime,
}

impl OpeningHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// `open <= start && end <= close`; closing is inclusive.
    pub fn contains(&self, start_minutes: u32, end_minutes: u32) -> bool {
        to_minutes(self.open) <= start_minutes && end_minutes <= to_minutes(self.close)
    }

    pub fn label(&self) -> String {
        format!("{}-{}", format_time(self.open), format_time(self.close))
    }
}

pub type WeekSchedule = Week<DayHours>;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

impl Default for WeekSchedule {
    /// Mon-Fri 09:00-18:00, Sat 09:00-14:00, Sun closed.
    fn default() -> Self {
        Week::from_fn(|day| match day {
            Weekday::Sat => DayHours::open(hm(9, 0), hm(14, 0)),
            Weekday::Sun => DayHours {
                is_open: false,
                open_time: hm(9, 0),
                close_time: hm(18, 0),
            },
            _ => DayHours::open(hm(9, 0), hm(18, 0)),
        })
    }
}
