// src/export/logic.rs

use crate::core::stats::StatsLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DayExport;
use crate::ui::messages::warning;
use crate::utils::date::MonthBounds;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the normalized days of `bounds` to `file` (absolute path).
    /// Returns the number of exported days.
    pub fn export(
        pool: &mut DbPool,
        user: &str,
        format: ExportFormat,
        file: &str,
        bounds: &MonthBounds,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let days: Vec<DayExport> = StatsLogic::month_days(pool, user, bounds)?
            .iter()
            .map(DayExport::from)
            .collect();

        if days.is_empty() {
            warning(format!("No days recorded for {}.", bounds.label()));
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&days, path)?,
            ExportFormat::Json => export_json(&days, path)?,
        }

        ttlog(
            &pool.conn,
            "export",
            &bounds.key(),
            &format!("{} days to {} ({})", days.len(), file, format.as_str()),
        )?;

        Ok(days.len())
    }
}
