//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database and bring its schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Fresh in-memory database with the full schema (tests, dry runs).
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}
