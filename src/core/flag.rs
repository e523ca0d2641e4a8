use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_day, upsert_day};
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use chrono::NaiveDate;

/// Rest/holiday toggling from the calendar view.
pub struct FlagLogic;

impl FlagLogic {
    /// Set the given flags on a day (creating it when needed). When the day
    /// ends up non-worked, its times, packages, overtime and role are reset.
    pub fn apply(
        pool: &DbPool,
        user: &str,
        date: NaiveDate,
        rest: Option<bool>,
        holiday: Option<bool>,
    ) -> AppResult<DayRecord> {
        let mut day = match load_day(&pool.conn, user, date)? {
            Some(raw) => raw.normalize()?,
            None => DayRecord::new(date),
        };

        if let Some(r) = rest {
            day.is_rest_day = r;
        }
        if let Some(h) = holiday {
            day.is_holiday = h;
        }

        if day.is_non_worked() {
            day.clear_work_fields();
        }

        upsert_day(&pool.conn, user, &day)?;
        ttlog(
            &pool.conn,
            "flag",
            &day.date_str(),
            &format!(
                "user={} rest={} holiday={}",
                user, day.is_rest_day, day.is_holiday
            ),
        )?;

        Ok(day)
    }
}
