pub mod add;
pub mod config;
pub mod export;
pub mod flag;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod palette;
pub mod profile;
pub mod show;
pub mod stats;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Parse a mandatory `YYYY-MM-DD` argument.
pub(crate) fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
