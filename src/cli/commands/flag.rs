use crate::cli::commands::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::flag::FlagLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// `on` / `off` (also `true`/`false`, `1`/`0`, `yes`/`no`).
fn parse_switch(v: &Option<String>) -> AppResult<Option<bool>> {
    let Some(raw) = v else {
        return Ok(None);
    };
    match raw.trim().to_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(Some(true)),
        "off" | "false" | "0" | "no" => Ok(Some(false)),
        _ => Err(AppError::Other(format!("expected on|off, got '{raw}'"))),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Flag {
        date,
        rest,
        holiday,
    } = cmd
    {
        let d = parse_date_arg(date)?;
        let rest = parse_switch(rest)?;
        let holiday = parse_switch(holiday)?;

        if rest.is_none() && holiday.is_none() {
            info("Nothing to change: use --rest on|off and/or --holiday on|off.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let day = FlagLogic::apply(&pool, &cfg.user, d, rest, holiday)?;

        success(format!(
            "{}: rest={} holiday={} ({})",
            d,
            if day.is_rest_day { "on" } else { "off" },
            if day.is_holiday { "on" } else { "off" },
            day.kind().label()
        ));
    }

    Ok(())
}
