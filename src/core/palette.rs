//! Palette tracking for FFL workers.
//!
//! Every change to a day's palettes rewrites that day's package count with
//! the palette total. Only the count is touched; times, flags and role stay
//! as they are. Sundays, rest days and holidays take no palettes, and their
//! count is never rewritten.

use crate::config::Profile;
use crate::db::log::ttlog;
use crate::db::palettes::{
    delete_palette, insert_palette, load_palette, load_palettes_for_date, update_palette,
};
use crate::db::pool::DbPool;
use crate::core::calculator::classifier::DayKind;
use crate::db::queries::{load_day, set_day_packages};
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::palette::{Palette, default_label, total_packages};
use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::{debug, warn};

pub struct PaletteLogic;

impl PaletteLogic {
    /// Palettes are reserved to the FFL sector.
    pub fn ensure_allowed(profile: &Profile) -> AppResult<()> {
        if profile.is_ffl() {
            Ok(())
        } else {
            let sector = if profile.sector.trim().is_empty() {
                "none".to_string()
            } else {
                profile.sector.clone()
            };
            Err(AppError::SectorRestricted(sector))
        }
    }

    pub fn list(pool: &DbPool, user: &str, date: NaiveDate) -> AppResult<Vec<Palette>> {
        load_palettes_for_date(&pool.conn, user, date)
    }

    /// Add a palette and return it together with the new day total.
    pub fn add(
        pool: &mut DbPool,
        user: &str,
        date: NaiveDate,
        label: Option<&str>,
        packages: u32,
    ) -> AppResult<(Palette, u32)> {
        pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            ensure_worked_day(&tx, user, date)?;

            let existing = load_palettes_for_date(&tx, user, date)?;
            let label = match label.map(str::trim) {
                Some(l) if !l.is_empty() => l.to_string(),
                _ => default_label(existing.len()).to_string(),
            };

            let id = insert_palette(&tx, user, date, &label, packages)?;
            let total = sync_day_total(&tx, user, date)?;
            ttlog(
                &tx,
                "palette_add",
                &date.format("%Y-%m-%d").to_string(),
                &format!("#{id} {label}: {packages} packages (day total {total})"),
            )?;

            let palette = load_palette(&tx, user, id)?;
            tx.commit()?;
            Ok((palette, total))
        })
    }

    /// Update label and/or packages of a palette; returns it with the new day total.
    pub fn set(
        pool: &mut DbPool,
        user: &str,
        id: i64,
        label: Option<&str>,
        packages: Option<u32>,
    ) -> AppResult<(Palette, u32)> {
        pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            let current = load_palette(&tx, user, id)?;
            ensure_worked_day(&tx, user, current.date)?;
            let label = label
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .unwrap_or(current.label.as_str())
                .to_string();
            let packages = packages.unwrap_or(current.packages);

            update_palette(&tx, user, id, &label, packages)?;
            let total = sync_day_total(&tx, user, current.date)?;
            ttlog(
                &tx,
                "palette_set",
                &current.date.format("%Y-%m-%d").to_string(),
                &format!("#{id} {label}: {packages} packages (day total {total})"),
            )?;

            let palette = load_palette(&tx, user, id)?;
            tx.commit()?;
            Ok((palette, total))
        })
    }

    /// Delete a palette; returns the removed palette and the new day total.
    pub fn delete(pool: &mut DbPool, user: &str, id: i64) -> AppResult<(Palette, u32)> {
        pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            let removed = load_palette(&tx, user, id)?;
            delete_palette(&tx, user, id)?;
            let total = sync_day_total(&tx, user, removed.date)?;
            ttlog(
                &tx,
                "palette_del",
                &removed.date.format("%Y-%m-%d").to_string(),
                &format!("#{id} {} removed (day total {total})", removed.label),
            )?;

            tx.commit()?;
            Ok((removed, total))
        })
    }
}

fn day_kind(conn: &Connection, user: &str, date: NaiveDate) -> AppResult<DayKind> {
    let day = match load_day(conn, user, date)? {
        Some(raw) => raw.normalize()?,
        None => DayRecord::new(date),
    };
    Ok(day.kind())
}

fn ensure_worked_day(conn: &Connection, user: &str, date: NaiveDate) -> AppResult<()> {
    let kind = day_kind(conn, user, date)?;
    if kind.is_worked() {
        Ok(())
    } else {
        warn!(date = %date, kind = kind.label(), "palette change refused on non-worked day");
        Err(AppError::NonWorkedDay(date.format("%Y-%m-%d").to_string(), kind.label()))
    }
}

/// Write the palette total of `date` into the day's package count.
/// Non-worked days keep their count.
fn sync_day_total(conn: &Connection, user: &str, date: NaiveDate) -> AppResult<u32> {
    let total = total_packages(&load_palettes_for_date(conn, user, date)?);
    if !day_kind(conn, user, date)?.is_worked() {
        debug!(date = %date, total, "non-worked day: package count left untouched");
        return Ok(total);
    }
    let upsert = set_day_packages(conn, user, date, total)?;
    debug!(date = %date, total, ?upsert, "day package count synced from palettes");
    Ok(total)
}
