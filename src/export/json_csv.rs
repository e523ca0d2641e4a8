// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{DayExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON array.
pub(crate) fn export_json(days: &[DayExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(days)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", days.len(), path);
    Ok(())
}

/// CSV with a header row taken from the field names.
pub(crate) fn export_csv(days: &[DayExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in days {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", days.len(), path);
    Ok(())
}
