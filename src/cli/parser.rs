use crate::export::ExportFormat;
use crate::models::role::Role;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rShiftLog
/// CLI timesheet for warehouse workers, backed by SQLite
#[derive(Parser)]
#[command(
    name = "rshiftlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track warehouse shifts, packages and overtime; compute monthly quota, bonus and worked hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of the one in the configuration
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or update the worker profile (contract, sector, ...)
    Profile {
        #[arg(long = "name", help = "Display name")]
        name: Option<String>,

        #[arg(long = "contract", help = "Contract type: CDI or CDD")]
        contract: Option<String>,

        #[arg(long = "sector", help = "Sector (SEC, FFL, Méca, Gel, ...)")]
        sector: Option<String>,

        #[arg(long = "city", help = "City")]
        city: Option<String>,
    },

    /// Record a day (creates it, or replaces the stored one)
    Add {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        #[arg(long = "start", help = "Shift start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "Shift end time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "packages", help = "Total packages handled")]
        packages: Option<u32>,

        #[arg(long = "overtime", help = "Overtime hours (e.g. 1.5)")]
        overtime: Option<String>,

        #[arg(long = "role", value_enum, help = "Position held")]
        role: Option<Role>,

        #[arg(long = "versatility", help = "Versatility bonus hours (0.5 .. 3.5, or NONE)")]
        versatility: Option<String>,

        #[arg(long = "rest", help = "Mark as rest day")]
        rest: bool,

        #[arg(long = "holiday", help = "Mark as public holiday")]
        holiday: bool,
    },

    /// Toggle the rest/holiday flags of a day
    Flag {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        #[arg(long = "rest", value_name = "on|off")]
        rest: Option<String>,

        #[arg(long = "holiday", value_name = "on|off")]
        holiday: Option<String>,
    },

    /// Show one day
    Show {
        /// Date of the day (YYYY-MM-DD)
        date: String,
    },

    /// List the recorded days of a month
    List {
        #[arg(long, short, help = "Month (YYYY-MM), default: current month")]
        month: Option<String>,
    },

    /// Monthly statistics: packages vs quota, worked hours
    Stats {
        #[arg(long, short, help = "Month (YYYY-MM), default: current month")]
        month: Option<String>,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },

    /// Track the palettes of a day (FFL sector)
    Palette {
        #[command(subcommand)]
        action: PaletteAction,
    },

    /// Import day records from a JSON export of the backend
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the day records of a month
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Month (YYYY-MM), default: current month")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum PaletteAction {
    /// Add a palette to a day
    Add {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Label (default: next NATO letter)")]
        label: Option<String>,

        #[arg(long, default_value_t = 0)]
        packages: u32,
    },

    /// List the palettes of a day
    List {
        /// Date of the day (YYYY-MM-DD), default: today
        date: Option<String>,
    },

    /// Update a palette
    Set {
        id: i64,

        #[arg(long)]
        label: Option<String>,

        #[arg(long)]
        packages: Option<u32>,
    },

    /// Delete a palette
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
