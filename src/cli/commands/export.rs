use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::MonthBounds;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let bounds = MonthBounds::resolve(month.as_deref())?;
        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, &cfg.user, *format, file, &bounds, *force)?;
    }

    Ok(())
}
