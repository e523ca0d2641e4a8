use crate::cli::commands::parse_date_arg;
use crate::cli::parser::{Commands, PaletteAction};
use crate::config::Config;
use crate::core::palette::PaletteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::palette::total_packages;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date;
use crate::utils::formatting::fmt_packages;
use crate::utils::table::{Column, Table};
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Palette { action } = cmd else {
        return Ok(());
    };

    PaletteLogic::ensure_allowed(&cfg.profile)?;
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        PaletteAction::Add {
            date,
            label,
            packages,
        } => {
            let d = parse_date_arg(date)?;
            let (p, total) = PaletteLogic::add(&mut pool, &cfg.user, d, label.as_deref(), *packages)?;
            success(format!(
                "Palette #{} '{}' added to {} ({} packages). Day total: {}",
                p.id,
                p.label,
                d,
                p.packages,
                fmt_packages(u64::from(total))
            ));
        }

        PaletteAction::List { date: date_arg } => {
            let d = match date_arg {
                Some(s) => parse_date_arg(s)?,
                None => date::today(),
            };
            let palettes = PaletteLogic::list(&pool, &cfg.user, d)?;

            header(format!("Palettes {}", d));
            if palettes.is_empty() {
                info("No palettes for this day.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("LABEL", 16),
                Column::new("PACKAGES", 8),
            ])
            .with_separator(cfg.separator());

            for p in &palettes {
                table.add_row(vec![
                    p.id.to_string(),
                    p.label.clone(),
                    fmt_packages(u64::from(p.packages)),
                ]);
            }
            print!("{}", table.render());
            println!(
                "Total: {} packages",
                fmt_packages(u64::from(total_packages(&palettes)))
            );
        }

        PaletteAction::Set {
            id,
            label,
            packages,
        } => {
            if label.is_none() && packages.is_none() {
                info("Nothing to change: use --label and/or --packages.");
                return Ok(());
            }
            let (p, total) = PaletteLogic::set(&mut pool, &cfg.user, *id, label.as_deref(), *packages)?;
            success(format!(
                "Palette #{} '{}' now has {} packages. Day total ({}): {}",
                p.id,
                p.label,
                p.packages,
                p.date,
                fmt_packages(u64::from(total))
            ));
        }

        PaletteAction::Del { id, yes } => {
            if !*yes && !ask_confirmation(&format!("Delete palette #{}? This action is irreversible.", id)) {
                info("Operation cancelled.");
                return Ok(());
            }
            let (p, total) = PaletteLogic::delete(&mut pool, &cfg.user, *id)?;
            success(format!(
                "Palette #{} '{}' deleted. Day total ({}): {}",
                p.id,
                p.label,
                p.date,
                fmt_packages(u64::from(total))
            ));
        }
    }

    Ok(())
}
