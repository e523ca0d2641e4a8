//! Formatting utilities used for CLI and export outputs.

/// Minutes → `7h00` (hours are not zero-padded, minutes always two digits).
pub fn fmt_hm(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}h{:02}", sign, m / 60, m % 60)
}

/// Decimal hours with two digits (`7.35`).
pub fn fmt_decimal_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Thousands separated package count (`12 480`).
pub fn fmt_packages(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hm_format() {
        assert_eq!(fmt_hm(420), "7h00");
        assert_eq!(fmt_hm(441), "7h21");
        assert_eq!(fmt_hm(0), "0h00");
        assert_eq!(fmt_hm(1505), "25h05");
    }

    #[test]
    fn package_grouping() {
        assert_eq!(fmt_packages(0), "0");
        assert_eq!(fmt_packages(999), "999");
        assert_eq!(fmt_packages(1260), "1 260");
        assert_eq!(fmt_packages(1234567), "1 234 567");
    }
}
