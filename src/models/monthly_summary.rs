use serde::Serialize;

/// Derived monthly figures. Recomputed on demand, never persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub daily_quota: u32,

    // packages
    pub total_packages: u64,
    pub packages_within_quota: u64,
    pub bonus_packages: u64,
    pub days_at_quota: u32,

    // hours
    pub worked_minutes: i64,
    pub overtime_minutes: i64,
    pub worked_days_count: u32,
    pub average_minutes_per_worked_day: i64,
    pub total_pause_minutes: i64,
}
