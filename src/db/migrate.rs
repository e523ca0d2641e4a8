//! Versioned schema migrations.
//!
//! Each migration is applied once; applied versions are recorded in the
//! `log` table as `migration_applied` rows (target = version).

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

/// `packages`, `overtime_hours`, `versatility` and the flags are declared
/// without a type so that imported values keep their representation
/// (`1`, `"true"`, `"1400"`...). They are normalized on read.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_days",
        description: "Created days table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS days (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user           TEXT NOT NULL,
            date           TEXT NOT NULL,
            start_time     TEXT,
            end_time       TEXT,
            packages,
            overtime_hours,
            role           TEXT,
            versatility,
            is_rest_day,
            is_holiday,
            created_at     TEXT NOT NULL,
            updated_at     TEXT NOT NULL,
            UNIQUE(user, date)
        );

        CREATE INDEX IF NOT EXISTS idx_days_user_date ON days(user, date);
        "#,
    },
    Migration {
        version: "20250301_0002_create_palettes",
        description: "Created palettes table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS palettes (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user        TEXT NOT NULL,
            date        TEXT NOT NULL,
            label       TEXT NOT NULL DEFAULT '',
            packages    INTEGER NOT NULL DEFAULT 0 CHECK(packages >= 0),
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_palettes_user_date ON palettes(user, date);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions applied so far, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
/// Returns the versions applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            debug!(version = m.version, "migration already applied");
            continue;
        }

        conn.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
        ttlog(conn, "migration_applied", m.version, m.description)?;

        debug!(version = m.version, "migration applied");
        applied.push(m.version);
    }

    if !applied.is_empty() {
        success(format!("Applied {} database migration(s).", applied.len()));
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_once() {
        let conn = Connection::open_in_memory().unwrap();
        let first = run_pending_migrations(&conn).unwrap();
        assert_eq!(first.len(), MIGRATIONS.len());

        let second = run_pending_migrations(&conn).unwrap();
        assert!(second.is_empty());

        let versions = applied_versions(&conn).unwrap();
        assert_eq!(versions.len(), MIGRATIONS.len());
        assert_eq!(versions[0], "20250301_0001_create_days");
    }
}
