use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_day, color_for_quota, colorize_optional};
use crate::utils::date::{MonthBounds, weekday_short};
use crate::utils::formatting::{fmt_hm, fmt_packages};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_optional_time;

/// Month listing: one line per stored day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let bounds = MonthBounds::resolve(month.as_deref())?;
        let pool = DbPool::new(&cfg.database)?;
        let days = StatsLogic::month_days(&pool, &cfg.user, &bounds)?;

        header(bounds.label());

        if days.is_empty() {
            info(format!("No days recorded for {}.", bounds.label()));
            return Ok(());
        }

        let quota = cfg.profile.daily_quota();

        let mut table = Table::new(vec![
            Column::new("DATE", 10),
            Column::new("DAY", 3),
            Column::new("KIND", 7),
            Column::new("START", 5),
            Column::new("END", 5),
            Column::new("WORKED", 6),
            Column::new("PACKAGES", 8),
            Column::new("OVERTIME", 8),
        ])
        .with_separator(cfg.separator());

        for day in &days {
            let non_worked = day.is_non_worked();
            let dim = color_for_day(non_worked);

            let packages = if non_worked {
                format!("{dim}{}{RESET}", fmt_packages(u64::from(day.package_count)))
            } else {
                format!(
                    "{}{}{RESET}",
                    color_for_quota(day.package_count, quota),
                    fmt_packages(u64::from(day.package_count))
                )
            };

            table.add_row(vec![
                format!("{dim}{}{RESET}", day.date_str()),
                weekday_short(day.date).to_string(),
                format!("{dim}{}{RESET}", day.kind().label()),
                colorize_optional(&format_optional_time(day.start_time)),
                colorize_optional(&format_optional_time(day.end_time)),
                colorize_optional(&fmt_hm(day.worked_minutes())),
                packages,
                colorize_optional(&fmt_hm(day.overtime_minutes())),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
