//! Import of day records exported from the backend (JSON).
//!
//! Accepts either a bare array of records or a list response with an
//! `items` array. Values are stored in their original representation and
//! only normalized when read back.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{Upsert, upsert_raw_day};
use crate::errors::{AppError, AppResult};
use crate::models::raw_day::RawDay;
use crate::utils::date::parse_stored_date;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl ImportReport {
    pub fn imported(&self) -> usize {
        self.created + self.updated
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Parse the JSON document into raw records.
    pub fn parse(content: &str) -> AppResult<Vec<RawDay>> {
        let doc: Value = serde_json::from_str(content)?;

        let items = match doc {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("items") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(AppError::Import(
                        "expected a JSON array or an object with an 'items' array".into(),
                    ));
                }
            },
            _ => return Err(AppError::Import("expected a JSON array of day records".into())),
        };

        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(serde_json::from_value::<RawDay>(item)?);
        }
        Ok(out)
    }

    /// Store every record with a readable date; the others are skipped.
    /// The whole import runs in one transaction.
    pub fn import_records(pool: &mut DbPool, user: &str, records: &[RawDay]) -> AppResult<ImportReport> {
        pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let mut report = ImportReport::default();

            for (idx, raw) in records.iter().enumerate() {
                let Some(date) = raw.date.as_str().and_then(parse_stored_date) else {
                    warn!(index = idx, date = %raw.date, "skipping record with unreadable date");
                    report.skipped += 1;
                    continue;
                };

                match upsert_raw_day(&tx, user, date, raw)? {
                    Upsert::Created => report.created += 1,
                    Upsert::Updated => report.updated += 1,
                }
            }

            ttlog(
                &tx,
                "import",
                user,
                &format!(
                    "{} created, {} updated, {} skipped",
                    report.created, report.updated, report.skipped
                ),
            )?;

            tx.commit()?;
            info!(?report, "import committed");
            Ok(report)
        })
    }

    pub fn import_file(pool: &mut DbPool, user: &str, path: &Path) -> AppResult<ImportReport> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Import(format!("cannot read {}: {e}", path.display())))?;
        let records = Self::parse(&content)?;
        Self::import_records(pool, user, &records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::load_days_in_range;
    use chrono::NaiveDate;

    const EXPORT: &str = r#"{
        "page": 1,
        "items": [
            {"date": "2025-03-10 00:00:00.000", "heureDebut": "2025-03-10 10:00:00.000",
             "heureFin": "2025-03-10 17:21:00.000", "colis": 1400, "isRepos": false},
            {"date": "2025-03-11", "colis": "1300", "isFerie": "true"},
            {"date": "not a date", "colis": 10},
            {"colis": 5}
        ]
    }"#;

    #[test]
    fn list_response_is_accepted_and_bad_dates_skipped() {
        let records = ImportLogic::parse(EXPORT).unwrap();
        assert_eq!(records.len(), 4);

        let mut pool = DbPool::in_memory().unwrap();
        let report = ImportLogic::import_records(&mut pool, "u", &records).unwrap();
        assert_eq!(
            report,
            ImportReport {
                created: 2,
                updated: 0,
                skipped: 2
            }
        );

        let again = ImportLogic::import_records(&mut pool, "u", &records).unwrap();
        assert_eq!(again.updated, 2);
        assert_eq!(again.imported(), 2);

        let from = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let stored = load_days_in_range(&pool.conn, "u", from, to).unwrap();
        assert_eq!(stored.len(), 2);

        let holiday = stored[1].normalize().unwrap();
        assert!(holiday.is_holiday);
        assert_eq!(holiday.package_count, 1300);
    }

    #[test]
    fn bare_array_is_accepted() {
        let records = ImportLogic::parse(r#"[{"date": "2025-03-10", "colis": 1}]"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(matches!(ImportLogic::parse("42"), Err(AppError::Import(_))));
        assert!(matches!(
            ImportLogic::parse(r#"{"page": 1}"#),
            Err(AppError::Import(_))
        ));
    }
}
