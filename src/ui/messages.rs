//! User-facing terminal messages. Diagnostics go through `tracing` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_GREY: &str = "\x1b[90m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section header: `=== Packages - March 2025 ===`
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}

/// `  label ........ value` row used by the day and month views.
pub fn row<L: fmt::Display, V: fmt::Display>(label: L, value: V) {
    let label = label.to_string();
    let dots = ".".repeat(34usize.saturating_sub(label.chars().count()));
    println!("  {} {}{}{} {}", label, FG_GREY, dots, RESET, value);
}

/// Bracketed badge: `[Sunday]`
pub fn badge<T: fmt::Display>(msg: T) -> String {
    format!("{}{}[{}]{}", FG_YELLOW, BOLD, msg, RESET)
}
