//! Day record store: create / full replace by date, and range reads.
//!
//! Rows are read back as [`RawDay`] so that every value goes through the
//! same normalization as imported data.

use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::models::raw_day::RawDay;
use chrono::{Local, NaiveDate};
use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde_json::Value;

/// Whether an upsert created a new day or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// SQLite dynamic value → JSON value, keeping its representation.
pub fn sql_to_json(v: SqlValue) -> Value {
    match v {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(i) => Value::from(i),
        SqlValue::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        SqlValue::Text(s) => Value::String(s),
        SqlValue::Blob(_) => Value::Null,
    }
}

/// JSON value → SQLite dynamic value. Booleans become 0/1, containers are
/// stored as their JSON text.
pub fn json_to_sql(v: &Value) -> SqlValue {
    match v {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => n.as_f64().map(SqlValue::Real).unwrap_or(SqlValue::Null),
        },
        Value::String(s) => SqlValue::Text(s.clone()),
        other => SqlValue::Text(other.to_string()),
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<RawDay> {
    let get = |name: &str| -> rusqlite::Result<Value> { Ok(sql_to_json(row.get(name)?)) };

    Ok(RawDay {
        date: get("date")?,
        start_time: get("start_time")?,
        end_time: get("end_time")?,
        packages: get("packages")?,
        overtime_hours: get("overtime_hours")?,
        role: get("role")?,
        versatility: get("versatility")?,
        is_rest_day: get("is_rest_day")?,
        is_holiday: get("is_holiday")?,
    })
}

/// Typed day → storage row values.
pub fn day_to_raw(day: &DayRecord) -> RawDay {
    let time = |t: Option<chrono::NaiveTime>| {
        t.map(|t| Value::String(t.format("%H:%M").to_string()))
            .unwrap_or(Value::Null)
    };

    RawDay {
        date: Value::String(day.date_str()),
        start_time: time(day.start_time),
        end_time: time(day.end_time),
        packages: Value::from(day.package_count),
        overtime_hours: serde_json::Number::from_f64(day.overtime_hours)
            .map(Value::Number)
            .unwrap_or_else(|| Value::from(0)),
        role: day
            .role
            .map(|r| Value::String(r.to_db_str().to_string()))
            .unwrap_or(Value::Null),
        versatility: day
            .versatility_bonus
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        is_rest_day: Value::Bool(day.is_rest_day),
        is_holiday: Value::Bool(day.is_holiday),
    }
}

fn day_exists(conn: &Connection, user: &str, date: &str) -> AppResult<bool> {
    let mut stmt =
        conn.prepare_cached("SELECT 1 FROM days WHERE user = ?1 AND date = ?2 LIMIT 1")?;
    Ok(stmt.query_row(params![user, date], |_| Ok(())).optional()?.is_some())
}

/// Create the row for `date`, or replace every stored field of the existing one.
/// `raw.date` must already be a `YYYY-MM-DD` key.
pub fn upsert_raw_day(conn: &Connection, user: &str, date: NaiveDate, raw: &RawDay) -> AppResult<Upsert> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let existed = day_exists(conn, user, &date_str)?;
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO days (user, date, start_time, end_time, packages, overtime_hours,
                           role, versatility, is_rest_day, is_holiday, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)
         ON CONFLICT(user, date) DO UPDATE SET
             start_time = excluded.start_time,
             end_time = excluded.end_time,
             packages = excluded.packages,
             overtime_hours = excluded.overtime_hours,
             role = excluded.role,
             versatility = excluded.versatility,
             is_rest_day = excluded.is_rest_day,
             is_holiday = excluded.is_holiday,
             updated_at = excluded.updated_at",
        params![
            user,
            date_str,
            json_to_sql(&raw.start_time),
            json_to_sql(&raw.end_time),
            json_to_sql(&raw.packages),
            json_to_sql(&raw.overtime_hours),
            json_to_sql(&raw.role),
            json_to_sql(&raw.versatility),
            json_to_sql(&raw.is_rest_day),
            json_to_sql(&raw.is_holiday),
            now,
        ],
    )?;

    Ok(if existed { Upsert::Updated } else { Upsert::Created })
}

pub fn upsert_day(conn: &Connection, user: &str, day: &DayRecord) -> AppResult<Upsert> {
    upsert_raw_day(conn, user, day.date, &day_to_raw(day))
}

pub fn load_day(conn: &Connection, user: &str, date: NaiveDate) -> AppResult<Option<RawDay>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM days WHERE user = ?1 AND date = ?2")?;
    let raw = stmt
        .query_row(params![user, date.format("%Y-%m-%d").to_string()], map_row)
        .optional()?;
    Ok(raw)
}

/// All days of `user` with `from <= date <= to`, ordered by date.
pub fn load_days_in_range(
    conn: &Connection,
    user: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<RawDay>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM days
         WHERE user = ?1 AND substr(date, 1, 10) BETWEEN ?2 AND ?3
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            user,
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Set only the package count of a day, creating a minimal record when the
/// day does not exist yet. Other fields are left untouched.
pub fn set_day_packages(conn: &Connection, user: &str, date: NaiveDate, packages: u32) -> AppResult<Upsert> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let now = Local::now().to_rfc3339();

    let updated = conn.execute(
        "UPDATE days SET packages = ?1, updated_at = ?2 WHERE user = ?3 AND date = ?4",
        params![packages, now, user, date_str],
    )?;

    if updated > 0 {
        return Ok(Upsert::Updated);
    }

    conn.execute(
        "INSERT INTO days (user, date, packages, overtime_hours, is_rest_day, is_holiday, created_at, updated_at)
         VALUES (?1, ?2, ?3, 0, 0, 0, ?4, ?4)",
        params![user, date_str, packages, now],
    )?;
    Ok(Upsert::Created)
}
