/// Mandatory pause deducted once per worked day.
pub const MANDATORY_PAUSE_MINUTES: i64 = 21;

/// Pause-adjusted minutes for a day.
///
/// Non-worked days count for nothing. Worked days with a positive raw
/// duration lose the mandatory pause, clamped at zero.
pub fn apply_pause(raw_minutes: i64, non_worked: bool) -> i64 {
    if non_worked || raw_minutes <= 0 {
        return 0;
    }
    (raw_minutes - MANDATORY_PAUSE_MINUTES).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deducts_once() {
        assert_eq!(apply_pause(441, false), 420);
        assert_eq!(apply_pause(21, false), 0);
        assert_eq!(apply_pause(10, false), 0);
    }

    #[test]
    fn non_worked_and_empty_days_count_zero() {
        assert_eq!(apply_pause(441, true), 0);
        assert_eq!(apply_pause(0, false), 0);
    }
}
