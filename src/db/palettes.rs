//! Palette rows: per-day labelled package counts.

use crate::errors::{AppError, AppResult};
use crate::models::palette::Palette;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_palette(row: &Row) -> rusqlite::Result<Palette> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Palette {
        id: row.get("id")?,
        date,
        label: row.get("label")?,
        packages: row.get("packages")?,
        created_at: row.get("created_at")?,
    })
}

pub fn load_palettes_for_date(conn: &Connection, user: &str, date: NaiveDate) -> AppResult<Vec<Palette>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM palettes WHERE user = ?1 AND date = ?2 ORDER BY created_at ASC, id ASC",
    )?;
    let rows = stmt.query_map(params![user, date.format("%Y-%m-%d").to_string()], map_palette)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_palette(conn: &Connection, user: &str, id: i64) -> AppResult<Palette> {
    let mut stmt = conn.prepare_cached("SELECT * FROM palettes WHERE user = ?1 AND id = ?2")?;
    stmt.query_row(params![user, id], map_palette)
        .optional()?
        .ok_or(AppError::PaletteNotFound(id))
}

pub fn insert_palette(
    conn: &Connection,
    user: &str,
    date: NaiveDate,
    label: &str,
    packages: u32,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO palettes (user, date, label, packages, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user,
            date.format("%Y-%m-%d").to_string(),
            label,
            packages,
            Local::now().to_rfc3339()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_palette(conn: &Connection, user: &str, id: i64, label: &str, packages: u32) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE palettes SET label = ?1, packages = ?2 WHERE user = ?3 AND id = ?4",
        params![label, packages, user, id],
    )?;
    if n == 0 {
        return Err(AppError::PaletteNotFound(id));
    }
    Ok(())
}

pub fn delete_palette(conn: &Connection, user: &str, id: i64) -> AppResult<()> {
    let n = conn.execute(
        "DELETE FROM palettes WHERE user = ?1 AND id = ?2",
        params![user, id],
    )?;
    if n == 0 {
        return Err(AppError::PaletteNotFound(id));
    }
    Ok(())
}
