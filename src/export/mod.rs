// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::DayExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, count: usize, path: &Path) {
    success(format!("{label} export completed ({count} days): {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
