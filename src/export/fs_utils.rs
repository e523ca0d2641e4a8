// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check that the output file can be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → ask the user
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "output file path must be absolute: {}",
            path.display()
        )));
    }

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
