pub mod add;
pub mod calculator;
pub mod config;
pub mod flag;
pub mod import;
pub mod log;
pub mod palette;
pub mod stats;
