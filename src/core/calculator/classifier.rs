//! Worked / non-worked classification of a calendar day.

use crate::utils::date::is_sunday;
use chrono::NaiveDate;
use serde::Serialize;

/// Single classification of a day. A day that is both a rest day and a
/// holiday (or falls on a Sunday) still gets exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayKind {
    Worked,
    Sunday,
    Holiday,
    RestDay,
}

impl DayKind {
    pub fn is_worked(&self) -> bool {
        matches!(self, DayKind::Worked)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayKind::Worked => "worked",
            DayKind::Sunday => "Sunday",
            DayKind::Holiday => "holiday",
            DayKind::RestDay => "rest",
        }
    }
}

/// Sunday always wins, then holiday, then rest day.
pub fn classify(date: NaiveDate, is_rest_day: bool, is_holiday: bool) -> DayKind {
    if is_sunday(date) {
        DayKind::Sunday
    } else if is_holiday {
        DayKind::Holiday
    } else if is_rest_day {
        DayKind::RestDay
    } else {
        DayKind::Worked
    }
}

pub fn is_non_worked(date: NaiveDate, is_rest_day: bool, is_holiday: bool) -> bool {
    !classify(date, is_rest_day, is_holiday).is_worked()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekday_without_flags_is_worked() {
        assert_eq!(classify(d(2025, 3, 10), false, false), DayKind::Worked);
        assert!(!is_non_worked(d(2025, 3, 15), false, false)); // Saturday
    }

    #[test]
    fn sunday_cannot_be_overridden() {
        assert_eq!(classify(d(2025, 3, 9), false, false), DayKind::Sunday);
        assert_eq!(classify(d(2025, 3, 9), true, true), DayKind::Sunday);
    }

    #[test]
    fn rest_and_holiday_yield_one_kind() {
        assert_eq!(classify(d(2025, 3, 10), true, true), DayKind::Holiday);
        assert!(is_non_worked(d(2025, 3, 10), true, true));
        assert!(is_non_worked(d(2025, 3, 10), true, false));
        assert!(is_non_worked(d(2025, 3, 10), false, true));
    }
}
