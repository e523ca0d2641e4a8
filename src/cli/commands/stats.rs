use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, row, warning};
use crate::utils::date::MonthBounds;
use crate::utils::formatting::{fmt_decimal_hours, fmt_hm, fmt_packages};

/// Monthly packages and hours summary.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { month, json } = cmd {
        let bounds = MonthBounds::resolve(month.as_deref())?;
        let pool = DbPool::new(&cfg.database)?;
        let contract = cfg.profile.contract_type();

        let report = StatsLogic::monthly(&pool, &cfg.user, &bounds, contract.daily_quota())?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        if report.excluded > 0 {
            warning(format!(
                "{} record(s) with an unreadable date were left out.",
                report.excluded
            ));
        }

        let s = &report.summary;

        header(format!("Packages - {}", bounds.label()));
        row(
            format!("Daily quota ({})", contract.code()),
            fmt_packages(u64::from(s.daily_quota)),
        );
        row("Within quota", fmt_packages(s.packages_within_quota));
        row("Bonus", fmt_packages(s.bonus_packages));
        row("Days at quota", s.days_at_quota);
        row("Total packages", fmt_packages(s.total_packages));

        header(format!("Hours - {}", bounds.label()));
        row(
            "Worked",
            format!(
                "{} ({} h)",
                fmt_hm(s.worked_minutes),
                fmt_decimal_hours(s.worked_minutes as f64 / 60.0)
            ),
        );
        row("Overtime", fmt_hm(s.overtime_minutes));
        row("Pause total", fmt_hm(s.total_pause_minutes));
        row("Worked days", s.worked_days_count);
        row("Average per worked day", fmt_hm(s.average_minutes_per_worked_day));
    }

    Ok(())
}
