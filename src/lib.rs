//! rShiftLog library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Profile { .. } => cli::commands::profile::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Flag { .. } => cli::commands::flag::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Palette { .. } => cli::commands::palette::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logging::init();

    let cli = Cli::parse();

    // config is loaded once; --db / --user only affect this run
    let cfg = Config::load()?.with_overrides(cli.db.as_ref(), cli.user.as_ref())?;
    tracing::debug!(database = %cfg.database, user = %cfg.user, "configuration loaded");

    dispatch(&cli, &cfg)
}
