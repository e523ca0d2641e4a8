use crate::cli::commands::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, DayInput, parse_overtime, parse_versatility};
use crate::db::pool::DbPool;
use crate::db::queries::Upsert;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::{fmt_decimal_hours, fmt_hm};
use crate::utils::time::parse_optional_time;

/// Create or update the record of a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        packages,
        overtime,
        role,
        versatility,
        rest,
        holiday,
    } = cmd
    {
        let d = parse_date_arg(date)?;

        let input = DayInput {
            start: parse_optional_time(start.as_ref())?,
            end: parse_optional_time(end.as_ref())?,
            packages: *packages,
            overtime_hours: overtime.as_deref().map(parse_overtime).transpose()?,
            role: *role,
            versatility: versatility.as_deref().map(parse_versatility).transpose()?,
            rest: *rest,
            holiday: *holiday,
        };

        let pool = DbPool::new(&cfg.database)?;
        let out = AddLogic::apply(&pool, &cfg.user, d, input)?;

        if out.forced_zero {
            warning(format!(
                "{} is a non-worked day ({}): packages and overtime set to 0.",
                d,
                out.day.kind().label()
            ));
        }

        let verb = match out.upsert {
            Upsert::Created => "recorded",
            Upsert::Updated => "updated",
        };

        let dur = out.day.duration();
        if dur.is_zero() {
            success(format!("Day {} {}.", d, verb));
        } else {
            success(format!(
                "Day {} {}: {} ({} h), {} worked after pause.",
                d,
                verb,
                fmt_hm(dur.total_minutes),
                fmt_decimal_hours(dur.decimal_hours),
                fmt_hm(out.day.worked_minutes())
            ));
        }
    }

    Ok(())
}
