//! Unified application error type.
//! Store, config, import/export and CLI code all return AppError so that the
//! error handling stays consistent. The aggregation engine itself never fails.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown contract type: {0} (expected CDI or CDD)")]
    InvalidContract(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No record found for date {0}")]
    NoRecordForDate(String),

    #[error("Palette not found: {0}")]
    PaletteNotFound(i64),

    #[error("Palette tracking is reserved to the FFL sector (current sector: {0})")]
    SectorRestricted(String),

    #[error("{0} is not a worked day ({1}): no palettes can be recorded")]
    NonWorkedDay(String, &'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
