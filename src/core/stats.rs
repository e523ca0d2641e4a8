use crate::core::calculator::monthly::aggregate_raw_month;
use crate::db::pool::DbPool;
use crate::db::queries::load_days_in_range;
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::models::monthly_summary::MonthlySummary;
use crate::utils::date::MonthBounds;
use serde::Serialize;
use tracing::warn;

/// Monthly figures plus what is needed to present them.
#[derive(Debug, Clone, Serialize)]
pub struct MonthReport {
    pub month: String,
    pub user: String,
    pub records: usize,
    pub excluded: usize,
    #[serde(flatten)]
    pub summary: MonthlySummary,
}

pub struct StatsLogic;

impl StatsLogic {
    pub fn monthly(pool: &DbPool, user: &str, bounds: &MonthBounds, daily_quota: u32) -> AppResult<MonthReport> {
        let raw = load_days_in_range(&pool.conn, user, bounds.first_day(), bounds.last_day())?;
        let (summary, excluded) = aggregate_raw_month(&raw, bounds, daily_quota);

        Ok(MonthReport {
            month: bounds.key(),
            user: user.to_string(),
            records: raw.len(),
            excluded,
            summary,
        })
    }

    /// Normalized days of the month, in date order. Unreadable rows are skipped.
    pub fn month_days(pool: &DbPool, user: &str, bounds: &MonthBounds) -> AppResult<Vec<DayRecord>> {
        let raw = load_days_in_range(&pool.conn, user, bounds.first_day(), bounds.last_day())?;

        let mut days: Vec<DayRecord> = raw
            .iter()
            .filter_map(|r| match r.normalize() {
                Ok(d) => Some(d),
                Err(e) => {
                    warn!(error = %e, "unreadable day skipped");
                    None
                }
            })
            .collect();
        days.sort_by_key(|d| d.date);
        Ok(days)
    }
}
