//! Untyped day record as it comes out of storage or a backend export.
//!
//! Field names follow the local schema; the backend names (`heureDebut`,
//! `colis`, `isRepos`, ...) are accepted as aliases. Every value is kept as
//! `serde_json::Value` until [`RawDay::normalize`] runs.

use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::role::Role;
use crate::utils::boolean::parse_boolean;
use crate::utils::date::parse_stored_date_in;
use crate::utils::number::{coerce_non_negative_f64, coerce_u32, parse_decimal};
use crate::utils::time::parse_stored_time_in;
use chrono::{Local, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDay {
    #[serde(default)]
    pub date: Value,
    #[serde(default, alias = "heureDebut", alias = "startTime")]
    pub start_time: Value,
    #[serde(default, alias = "heureFin", alias = "endTime")]
    pub end_time: Value,
    #[serde(default, alias = "colis", alias = "packageCount")]
    pub packages: Value,
    #[serde(default, alias = "heuresSupp", alias = "overtimeHours")]
    pub overtime_hours: Value,
    #[serde(default, alias = "poste")]
    pub role: Value,
    #[serde(default, alias = "polyvalence", alias = "versatilityBonus")]
    pub versatility: Value,
    #[serde(default, alias = "isRepos", alias = "isRestDay")]
    pub is_rest_day: Value,
    #[serde(default, alias = "isFerie", alias = "isHoliday")]
    pub is_holiday: Value,
}

impl RawDay {
    /// Normalize into a typed [`DayRecord`], reading timestamps in local time.
    pub fn normalize(&self) -> AppResult<DayRecord> {
        self.normalize_in(&Local)
    }

    /// Normalize into a typed [`DayRecord`].
    ///
    /// Only a missing or malformed date is an error. Malformed times become
    /// absent, malformed numbers become zero, flags go through `parse_boolean`.
    /// Timestamps with an offset are converted to `tz` first.
    pub fn normalize_in<Tz: TimeZone>(&self, tz: &Tz) -> AppResult<DayRecord> {
        let date = self
            .date
            .as_str()
            .and_then(|s| parse_stored_date_in(s, tz))
            .ok_or_else(|| AppError::InvalidDate(self.date.to_string()))?;

        Ok(DayRecord {
            date,
            start_time: time_of(&self.start_time, tz),
            end_time: time_of(&self.end_time, tz),
            package_count: coerce_u32(&self.packages),
            overtime_hours: coerce_non_negative_f64(&self.overtime_hours),
            role: self.role.as_str().and_then(Role::from_db_str),
            versatility_bonus: versatility_of(&self.versatility),
            is_rest_day: parse_boolean(&self.is_rest_day),
            is_holiday: parse_boolean(&self.is_holiday),
        })
    }
}

fn time_of<Tz: TimeZone>(v: &Value, tz: &Tz) -> Option<NaiveTime> {
    v.as_str().and_then(|s| parse_stored_time_in(s, tz))
}

/// `"NONE"`, empty or unparsable → `None`; otherwise hours.
fn versatility_of(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64().filter(|h| *h > 0.0),
        Value::String(s) => parse_decimal(s).filter(|h| *h > 0.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};
    use serde_json::json;

    #[test]
    fn backend_field_names_are_accepted() {
        let raw: RawDay = serde_json::from_value(json!({
            "id": "abc123",
            "user": "u1",
            "date": "2025-03-09 23:00:00.000Z",
            "heureDebut": "2000-01-01 09:00:00.000Z",
            "heureFin": "2000-01-01 16:21:00.000Z",
            "colis": "1400",
            "heuresSupp": 1.5,
            "poste": "PREPA",
            "polyvalence": "0.5",
            "isRepos": "0",
            "isFerie": 0
        }))
        .unwrap();

        let paris = FixedOffset::east_opt(3600).unwrap();
        let day = raw.normalize_in(&paris).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(day.start_time, NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(day.end_time, NaiveTime::from_hms_opt(17, 21, 0));
        assert_eq!(day.package_count, 1400);
        assert_eq!(day.overtime_hours, 1.5);
        assert_eq!(day.role, Some(Role::Picker));
        assert_eq!(day.versatility_bonus, Some(0.5));
        assert!(!day.is_rest_day);
        assert!(!day.is_holiday);
    }

    #[test]
    fn string_one_holiday_is_true() {
        let raw: RawDay =
            serde_json::from_value(json!({"date": "2025-03-11", "isFerie": "1"})).unwrap();
        let day = raw.normalize().unwrap();
        assert!(day.is_holiday);
        assert!(day.is_non_worked());
    }

    #[test]
    fn malformed_fields_degrade() {
        let raw: RawDay = serde_json::from_value(json!({
            "date": "2025-03-12",
            "start_time": "soon",
            "end_time": null,
            "packages": "lots",
            "overtime_hours": "-3",
            "versatility": "NONE",
            "role": "pilot"
        }))
        .unwrap();

        let day = raw.normalize().unwrap();
        assert_eq!(day.start_time, None);
        assert_eq!(day.end_time, None);
        assert_eq!(day.package_count, 0);
        assert_eq!(day.overtime_hours, 0.0);
        assert_eq!(day.versatility_bonus, None);
        assert_eq!(day.role, None);
    }

    #[test]
    fn malformed_date_is_an_error() {
        let raw: RawDay = serde_json::from_value(json!({"date": "12/03/2025"})).unwrap();
        assert!(matches!(raw.normalize(), Err(AppError::InvalidDate(_))));

        let missing = RawDay::default();
        assert!(missing.normalize().is_err());
    }
}
