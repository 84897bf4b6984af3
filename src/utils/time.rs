//! Time utilities: parsing HH:MM, minute arithmetic, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Strict variant returning `AppError::InvalidTime`.
pub fn parse_hhmm(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input.map(|s| parse_hhmm(s)).transpose()
}

/// Minutes since midnight.
pub fn to_minutes(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Wall-clock label for a minute offset; 1440 renders as `24:00`.
pub fn format_minutes(mins: u32) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

/// Parse a positive duration in minutes ("45", "45m", "1h30").
pub fn parse_duration(s: &str) -> AppResult<u32> {
    let raw = s.trim().to_lowercase();
    let invalid = || AppError::InvalidDuration(s.to_string());

    let mins = if let Some((h, m)) = raw.split_once('h') {
        let hours: u32 = h.trim().parse().map_err(|_| invalid())?;
        let m = m.trim().trim_end_matches('m');
        let minutes: u32 = if m.is_empty() {
            0
        } else {
            m.parse().map_err(|_| invalid())?
        };
        hours
            .checked_mul(60)
            .and_then(|m| m.checked_add(minutes))
            .ok_or_else(invalid)?
    } else {
        raw.trim_end_matches('m').parse().map_err(|_| invalid())?
    };

    if mins == 0 {
        return Err(invalid());
    }
    Ok(mins)
}
