use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{check_file, migrate_file};
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", ConfigLogic::render(cfg)?);
        }

        if (*check || *migrate) && !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {} (run `rshiftlog init`)",
                path.display()
            )));
        }

        if *check {
            let missing = check_file(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
                info("Run `rshiftlog config --migrate` to add them with default values.");
            }
        }

        if *migrate {
            migrate_file(&path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}
