pub mod boolean;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod number;
pub mod table;
pub mod time;

pub use boolean::parse_boolean;
pub use formatting::fmt_hm;

use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

/// Remove ANSI color sequences (used to measure visible width).
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}
