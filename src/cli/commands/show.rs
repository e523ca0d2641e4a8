use crate::cli::commands::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::pause::MANDATORY_PAUSE_MINUTES;
use crate::db::pool::DbPool;
use crate::db::queries::load_day;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{badge, header, row};
use crate::utils::colors::{RESET, color_for_quota};
use crate::utils::date::weekday_short;
use crate::utils::formatting::{fmt_decimal_hours, fmt_hm, fmt_packages};
use crate::utils::time::format_optional_time;

/// Print one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let d = parse_date_arg(date)?;
        let pool = DbPool::new(&cfg.database)?;

        let day = load_day(&pool.conn, &cfg.user, d)?
            .ok_or_else(|| AppError::NoRecordForDate(d.to_string()))?
            .normalize()?;

        let mut badges = Vec::new();
        if day.is_sunday() {
            badges.push(badge("Sunday"));
        }
        if day.is_holiday {
            badges.push(badge("Holiday"));
        }
        if day.is_rest_day {
            badges.push(badge("Rest"));
        }

        header(format!("{} {} {}", weekday_short(d), d, badges.join(" ")));

        let dur = day.duration();
        row("Start", format_optional_time(day.start_time));
        row("End", format_optional_time(day.end_time));
        row(
            "Duration",
            format!("{} ({} h)", fmt_hm(dur.total_minutes), fmt_decimal_hours(dur.decimal_hours)),
        );

        if day.is_non_worked() {
            row("Worked", format!("{} (non-worked day)", fmt_hm(0)));
        } else {
            if dur.total_minutes > 0 {
                row("Pause", format!("-{MANDATORY_PAUSE_MINUTES} min"));
            }
            row("Worked", fmt_hm(day.worked_minutes()));
        }

        let quota = cfg.profile.daily_quota();
        row(
            "Packages",
            format!(
                "{}{}{} / {}",
                color_for_quota(day.package_count, quota),
                fmt_packages(u64::from(day.package_count)),
                RESET,
                fmt_packages(u64::from(quota))
            ),
        );
        row("Overtime", fmt_hm(day.overtime_minutes()));

        if let Some(role) = day.role {
            row("Role", role.label());
        }
        if let Some(v) = day.versatility_bonus {
            row("Versatility", format!("{v} h"));
        }
    }

    Ok(())
}
