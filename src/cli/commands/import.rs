use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        info(format!("Importing {} for user '{}'", file, cfg.user));
        let report = ImportLogic::import_file(&mut pool, &cfg.user, Path::new(file))?;

        if report.skipped > 0 {
            warning(format!(
                "{} record(s) skipped: missing or unreadable date.",
                report.skipped
            ));
        }
        success(format!(
            "Imported {} day(s): {} created, {} updated.",
            report.imported(),
            report.created,
            report.updated
        ));
    }

    Ok(())
}
