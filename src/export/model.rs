// src/export/model.rs

use crate::core::calculator::duration::DayDuration;
use crate::models::day_record::DayRecord;
use crate::utils::date::weekday_short;
use chrono::NaiveTime;
use serde::Serialize;

/// Flat, normalized view of a day for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayExport {
    pub date: String,
    pub weekday: String,
    pub kind: String,
    pub start: String,
    pub end: String,
    pub raw_minutes: i64,
    pub worked_minutes: i64,
    pub worked_hours: f64,
    pub packages: u32,
    pub overtime_hours: f64,
    pub role: String,
    pub versatility_hours: String,
    pub rest_day: bool,
    pub holiday: bool,
}

impl From<&DayRecord> for DayExport {
    fn from(d: &DayRecord) -> Self {
        let time = |t: Option<NaiveTime>| t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default();
        let worked = d.worked_minutes();

        Self {
            date: d.date_str(),
            weekday: weekday_short(d.date).to_string(),
            kind: d.kind().label().to_string(),
            start: time(d.start_time),
            end: time(d.end_time),
            raw_minutes: d.duration().total_minutes,
            worked_minutes: worked,
            worked_hours: DayDuration::from_minutes(worked).decimal_hours,
            packages: d.package_count,
            overtime_hours: d.overtime_hours,
            role: d.role.map(|r| r.to_db_str().to_string()).unwrap_or_default(),
            versatility_hours: d.versatility_bonus.map(|v| v.to_string()).unwrap_or_default(),
            rest_day: d.is_rest_day,
            holiday: d.is_holiday,
        }
    }
}
