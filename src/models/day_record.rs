use crate::core::calculator::classifier::{self, DayKind};
use crate::core::calculator::duration::{self, DayDuration};
use crate::core::calculator::pause;
use crate::models::role::Role;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One working day of one user, normalized from storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,                // ⇔ days.date (TEXT "YYYY-MM-DD")
    pub start_time: Option<NaiveTime>,  // ⇔ days.start_time (TEXT "HH:MM", nullable)
    pub end_time: Option<NaiveTime>,    // ⇔ days.end_time (TEXT "HH:MM", nullable)
    pub package_count: u32,             // ⇔ days.packages
    pub overtime_hours: f64,            // ⇔ days.overtime_hours
    pub role: Option<Role>,             // ⇔ days.role (advisory)
    pub versatility_bonus: Option<f64>, // ⇔ days.versatility, hours (advisory)
    pub is_rest_day: bool,              // ⇔ days.is_rest_day
    pub is_holiday: bool,               // ⇔ days.is_holiday
}

impl DayRecord {
    /// Empty record for a date: no times, nothing handled, no flags.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            start_time: None,
            end_time: None,
            package_count: 0,
            overtime_hours: 0.0,
            role: None,
            versatility_bonus: None,
            is_rest_day: false,
            is_holiday: false,
        }
    }

    pub fn is_sunday(&self) -> bool {
        crate::utils::date::is_sunday(self.date)
    }

    pub fn is_non_worked(&self) -> bool {
        classifier::is_non_worked(self.date, self.is_rest_day, self.is_holiday)
    }

    pub fn kind(&self) -> DayKind {
        classifier::classify(self.date, self.is_rest_day, self.is_holiday)
    }

    /// Raw elapsed time between start and end (no pause deducted).
    pub fn duration(&self) -> DayDuration {
        duration::day_duration(self.start_time, self.end_time)
    }

    /// Pause-adjusted minutes counted toward worked totals.
    pub fn worked_minutes(&self) -> i64 {
        pause::apply_pause(self.duration().total_minutes, self.is_non_worked())
    }

    pub fn overtime_minutes(&self) -> i64 {
        (self.overtime_hours * 60.0).round().max(0.0) as i64
    }

    /// Entry-time rule: a non-worked day carries no packages and no overtime.
    /// Returns `true` when something had to be reset.
    pub fn force_non_worked_zeros(&mut self) -> bool {
        if !self.is_non_worked() {
            return false;
        }

        let changed = self.package_count != 0 || self.overtime_hours != 0.0;
        self.package_count = 0;
        self.overtime_hours = 0.0;
        changed
    }

    /// Reset everything but the date and flags (used when a day is flagged
    /// rest/holiday from the calendar view).
    pub fn clear_work_fields(&mut self) {
        self.start_time = None;
        self.end_time = None;
        self.package_count = 0;
        self.overtime_hours = 0.0;
        self.role = None;
        self.versatility_bonus = None;
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> DayRecord {
        DayRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn t(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn worked_minutes_deduct_pause() {
        let mut r = day(2025, 3, 10);
        r.start_time = t(10, 0);
        r.end_time = t(17, 21);
        assert_eq!(r.duration().total_minutes, 441);
        assert_eq!(r.worked_minutes(), 420);
    }

    #[test]
    fn sunday_worked_minutes_are_zero() {
        let mut r = day(2025, 3, 9);
        r.start_time = t(6, 0);
        r.end_time = t(13, 0);
        assert!(r.is_sunday());
        assert_eq!(r.worked_minutes(), 0);
    }

    #[test]
    fn forcing_zeros_only_on_non_worked_days() {
        let mut worked = day(2025, 3, 10);
        worked.package_count = 900;
        assert!(!worked.force_non_worked_zeros());
        assert_eq!(worked.package_count, 900);

        let mut holiday = day(2025, 3, 10);
        holiday.is_holiday = true;
        holiday.package_count = 900;
        holiday.overtime_hours = 1.5;
        assert!(holiday.force_non_worked_zeros());
        assert_eq!(holiday.package_count, 0);
        assert_eq!(holiday.overtime_hours, 0.0);
    }

    #[test]
    fn overtime_minutes_round() {
        let mut r = day(2025, 3, 10);
        r.overtime_hours = 1.26;
        assert_eq!(r.overtime_minutes(), 76);
    }
}
