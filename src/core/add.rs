use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{Upsert, load_day, upsert_day};
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::role::Role;
use crate::utils::number::parse_decimal;
use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

/// Values entered for a day. `None` keeps what is already stored.
#[derive(Debug, Clone, Default)]
pub struct DayInput {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub packages: Option<u32>,
    pub overtime_hours: Option<f64>,
    pub role: Option<Role>,
    /// `Some(None)` clears the bonus (`--versatility NONE`).
    pub versatility: Option<Option<f64>>,
    pub rest: bool,
    pub holiday: bool,
}

#[derive(Debug)]
pub struct AddOutcome {
    pub day: DayRecord,
    pub upsert: Upsert,
    /// Packages or overtime were entered on a non-worked day and reset to zero.
    pub forced_zero: bool,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Merge `input` over the stored day (if any) and write the whole record back.
    pub fn apply(pool: &DbPool, user: &str, date: NaiveDate, input: DayInput) -> AppResult<AddOutcome> {
        let mut day = match load_day(&pool.conn, user, date)? {
            Some(raw) => raw.normalize()?,
            None => DayRecord::new(date),
        };

        if let Some(t) = input.start {
            day.start_time = Some(t);
        }
        if let Some(t) = input.end {
            day.end_time = Some(t);
        }
        if let Some(p) = input.packages {
            day.package_count = p;
        }
        if let Some(h) = input.overtime_hours {
            day.overtime_hours = h;
        }
        if let Some(r) = input.role {
            day.role = Some(r);
        }
        if let Some(v) = input.versatility {
            day.versatility_bonus = v;
        }
        if input.rest {
            day.is_rest_day = true;
        }
        if input.holiday {
            day.is_holiday = true;
        }

        let forced_zero = day.force_non_worked_zeros();
        if forced_zero {
            debug!(date = %date, kind = day.kind().label(), "non-worked day: packages and overtime reset");
        }

        let upsert = upsert_day(&pool.conn, user, &day)?;

        let op = match upsert {
            Upsert::Created => "add",
            Upsert::Updated => "edit",
        };
        ttlog(
            &pool.conn,
            op,
            &day.date_str(),
            &format!(
                "user={} packages={} overtime={} worked={}min",
                user,
                day.package_count,
                day.overtime_hours,
                day.worked_minutes()
            ),
        )?;

        Ok(AddOutcome {
            day,
            upsert,
            forced_zero,
        })
    }
}

/// Parse `--overtime`: non-negative decimal hours.
pub fn parse_overtime(s: &str) -> AppResult<f64> {
    match parse_decimal(s) {
        Some(h) if h >= 0.0 => Ok(h),
        _ => Err(AppError::InvalidNumber(format!("overtime '{s}'"))),
    }
}

/// Parse `--versatility`: `NONE` clears it, otherwise positive decimal hours.
pub fn parse_versatility(s: &str) -> AppResult<Option<f64>> {
    if s.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    match parse_decimal(s) {
        Some(h) if h > 0.0 => Ok(Some(h)),
        _ => Err(AppError::InvalidNumber(format!("versatility '{s}'"))),
    }
}
