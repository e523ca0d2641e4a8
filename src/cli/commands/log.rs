use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Log { print: true } => {
            let mut pool = DbPool::new(&cfg.database)?;
            LogLogic::print_log(&mut pool)?;
        }
        Commands::Log { print: false } => info("Use `rshiftlog log --print` to show the internal log."),
        _ => {}
    }

    Ok(())
}
