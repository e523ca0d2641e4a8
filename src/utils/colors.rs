/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";

/// Quota color:
/// at or above quota → green
/// below quota → yellow
/// nothing recorded → grey
pub fn color_for_quota(packages: u32, quota: u32) -> &'static str {
    if packages == 0 {
        GREY
    } else if packages >= quota {
        GREEN
    } else {
        YELLOW
    }
}

/// Non-worked days are greyed out in listings.
pub fn color_for_day(non_worked: bool) -> &'static str {
    if non_worked { GREY } else { RESET }
}

/// Returns a colored rendering of an optional value.
///
/// Example:
/// `colorize_optional("--:--")` → "<grey>--:--<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty()
        || value.trim() == "--:--"
        || value.trim() == "0h00"
        || value.trim() == "-"
    {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_colors() {
        assert_eq!(color_for_quota(0, 1260), GREY);
        assert_eq!(color_for_quota(1000, 1260), YELLOW);
        assert_eq!(color_for_quota(1260, 1260), GREEN);
    }

    #[test]
    fn empty_values_are_greyed() {
        assert_eq!(colorize_optional("--:--"), format!("{GREY}--:--{RESET}"));
        assert_eq!(colorize_optional("7h00"), "7h00");
    }
}
