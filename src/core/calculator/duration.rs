//! Elapsed time between a start and an end time-of-day on the same nominal day.

use chrono::NaiveTime;
use serde::Serialize;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Duration of a shift, split for display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct DayDuration {
    pub total_minutes: i64,
    pub hours: i64,
    pub minutes: i64,
    /// Hours rounded to two decimals (`7.35`).
    pub decimal_hours: f64,
}

impl DayDuration {
    pub fn from_minutes(total_minutes: i64) -> Self {
        let total_minutes = total_minutes.max(0);
        Self {
            total_minutes,
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
            decimal_hours: (total_minutes as f64 / 60.0 * 100.0).round() / 100.0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total_minutes == 0
    }
}

/// Compute the elapsed minutes between `start` and `end`.
///
/// An end before the start means the shift crossed midnight and 24h are added.
/// The result is rounded to the nearest minute (half up). Missing start or
/// end yields a zero duration.
pub fn day_duration(start: Option<NaiveTime>, end: Option<NaiveTime>) -> DayDuration {
    let (Some(start), Some(end)) = (start, end) else {
        return DayDuration::default();
    };

    let mut ms = (end - start).num_milliseconds();
    if ms < 0 {
        ms += DAY_MS;
    }

    DayDuration::from_minutes((ms.max(0) + 30_000) / 60_000)
}
