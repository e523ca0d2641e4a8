//! Monthly rollup of day records: packages against the daily quota, and
//! pause-adjusted worked time.

use crate::core::calculator::pause::MANDATORY_PAUSE_MINUTES;
use crate::models::day_record::DayRecord;
use crate::models::monthly_summary::MonthlySummary;
use crate::models::raw_day::RawDay;
use crate::utils::date::MonthBounds;
use tracing::{debug, warn};

/// Fold the records of one user into a [`MonthlySummary`].
///
/// Records outside `bounds` are ignored. The fold is order independent:
/// every figure is a sum or a count.
pub fn aggregate_month<'a, I>(records: I, bounds: &MonthBounds, daily_quota: u32) -> MonthlySummary
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    let quota = u64::from(daily_quota);
    let mut s = MonthlySummary {
        daily_quota,
        ..Default::default()
    };

    for r in records {
        if !bounds.contains(r.date) {
            debug!(date = %r.date, month = %bounds.key(), "record outside month ignored");
            continue;
        }

        let packages = u64::from(r.package_count);

        // Every stored record counts toward the total, worked or not.
        s.total_packages = s.total_packages.saturating_add(packages);

        // Overtime is summed without the non-worked gate.
        s.overtime_minutes = s.overtime_minutes.saturating_add(r.overtime_minutes());

        if r.is_non_worked() {
            continue;
        }

        s.packages_within_quota = s.packages_within_quota.saturating_add(packages.min(quota));
        s.bonus_packages = s.bonus_packages.saturating_add(packages.saturating_sub(quota));
        if packages >= quota {
            s.days_at_quota += 1;
        }

        let raw = r.duration().total_minutes;
        if raw > 0 {
            s.worked_days_count += 1;
            s.worked_minutes = s.worked_minutes.saturating_add(r.worked_minutes());
        }
    }

    s.average_minutes_per_worked_day = if s.worked_days_count > 0 {
        (s.worked_minutes as f64 / s.worked_days_count as f64).round() as i64
    } else {
        0
    };
    s.total_pause_minutes = i64::from(s.worked_days_count) * MANDATORY_PAUSE_MINUTES;

    s
}

/// Normalize untyped stored records, then aggregate.
///
/// Records whose date cannot be read are left out of the month bucket with
/// a warning; they never abort the computation. Returns the summary and the
/// number of excluded records.
pub fn aggregate_raw_month(
    raw: &[RawDay],
    bounds: &MonthBounds,
    daily_quota: u32,
) -> (MonthlySummary, usize) {
    let mut excluded = 0;
    let records: Vec<DayRecord> = raw
        .iter()
        .filter_map(|r| match r.normalize() {
            Ok(day) => Some(day),
            Err(e) => {
                warn!(error = %e, "record excluded from monthly aggregation");
                excluded += 1;
                None
            }
        })
        .collect();

    (aggregate_month(&records, bounds, daily_quota), excluded)
}
