use crate::cli::parser::Commands;
use crate::config::{Config, FFL_SECTOR};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::contract::ContractType;
use crate::ui::messages::{header, row, success};
use crate::utils::formatting::fmt_packages;

/// Show the profile, or update it when any field is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        name,
        contract,
        sector,
        city,
    } = cmd
    {
        let changed = name.is_some() || contract.is_some() || sector.is_some() || city.is_some();

        let profile = if changed {
            // reload so that --db / --user overrides are not persisted
            let mut stored = Config::load()?;

            if let Some(c) = contract {
                let ct = ContractType::from_code(c)
                    .ok_or_else(|| AppError::InvalidContract(c.clone()))?;
                stored.profile.contract = ct.code().to_string();
            }
            if let Some(n) = name {
                stored.profile.display_name = n.trim().to_string();
            }
            if let Some(s) = sector {
                let s = s.trim();
                stored.profile.sector = if s.eq_ignore_ascii_case("ffl") {
                    FFL_SECTOR.to_string()
                } else {
                    s.to_string()
                };
            }
            if let Some(c) = city {
                stored.profile.city = c.trim().to_string();
            }

            stored.save()?;

            let pool = DbPool::new(&cfg.database)?;
            ttlog(
                &pool.conn,
                "profile",
                &cfg.user,
                &format!(
                    "contract={} sector={}",
                    stored.profile.contract, stored.profile.sector
                ),
            )?;

            success("Profile updated.");
            stored.profile
        } else {
            cfg.profile.clone()
        };

        header("Profile");
        row("User", &cfg.user);
        row("Name", &profile.display_name);
        row("Contract", profile.contract_type().code());
        row("Daily quota", format!("{} packages", fmt_packages(u64::from(profile.daily_quota()))));
        row("Sector", &profile.sector);
        row("City", &profile.city);
        row("Palette tracking", if profile.is_ffl() { "yes" } else { "no" });
    }

    Ok(())
}
