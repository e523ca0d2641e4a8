//! Time utilities: parsing stored/entered times of day.

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_offset_timestamp;
use chrono::{Local, NaiveDateTime, NaiveTime, TimeZone};

/// Parse a CLI time (`HH:MM` or `HH:MM:SS`).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parse a stored time of day in the local time zone. See [`parse_stored_time_in`].
pub fn parse_stored_time(s: &str) -> Option<NaiveTime> {
    parse_stored_time_in(s, &Local)
}

/// Parse a stored time of day.
///
/// Accepts `HH:MM`, `HH:MM:SS(.fff)`, RFC 3339 timestamps and the backend
/// format `YYYY-MM-DD HH:MM:SS.fffZ`. Timestamps with an offset are converted
/// to `tz`; timestamps without one keep the time as written.
pub fn parse_stored_time_in<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<NaiveTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(t) = parse_time(s) {
        return Some(t);
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S%.f") {
        return Some(t);
    }

    if let Some(dt) = parse_offset_timestamp(s) {
        return Some(dt.with_timezone(tz).time());
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.time())
}

/// `HH:MM`, or `--:--` when absent.
pub fn format_optional_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
