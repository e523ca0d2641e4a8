use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (kept profile, updated database path)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info("Initializing rShiftLog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "database",
        &format!("Database initialized at {}", db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("Database initialized at {}", db_path));
    Ok(())
}
