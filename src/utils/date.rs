//! Date helpers: month bounds, stored-date parsing, Sunday detection.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, FixedOffset, Local, Months, NaiveDate, NaiveDateTime, TimeZone, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a CLI date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Stored timestamp carrying an explicit offset: RFC 3339
/// (`2025-03-09T23:00:00.000Z`, `...+01:00`) or the backend format with a
/// space separator (`2025-03-09 23:00:00.000Z`).
pub fn parse_offset_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.get(10..11) == Some(" ") {
        let mut rfc = s.to_string();
        rfc.replace_range(10..11, "T");
        return DateTime::parse_from_rfc3339(&rfc).ok();
    }
    DateTime::parse_from_rfc3339(s).ok()
}

/// Parse a stored date in the local time zone. See [`parse_stored_date_in`].
pub fn parse_stored_date(s: &str) -> Option<NaiveDate> {
    parse_stored_date_in(s, &Local)
}

/// Parse a stored date: `YYYY-MM-DD`, or a timestamp.
///
/// Timestamps with an offset are instants (the backend stores local midnight
/// as UTC) and are converted to `tz` before taking the calendar date.
/// Timestamps without an offset keep their date as written.
pub fn parse_stored_date_in<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<NaiveDate> {
    if let Some(dt) = parse_offset_timestamp(s) {
        return Some(dt.with_timezone(tz).date_naive());
    }

    let s = s.trim();
    let head = s.get(..10)?;

    match s.as_bytes().get(10) {
        None | Some(b'T') | Some(b't') | Some(b' ') => {}
        Some(_) => return None,
    }

    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

pub fn weekday_short(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Inclusive bounds of a calendar month: first day 00:00:00.000 up to
/// last day 23:59:59.999.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBounds {
    pub year: i32,
    pub month: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl MonthBounds {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;

        Some(Self {
            year,
            month,
            start: first.and_hms_milli_opt(0, 0, 0, 0)?,
            end: last.and_hms_milli_opt(23, 59, 59, 999)?,
        })
    }

    /// Bounds of the month containing `date`.
    pub fn of(date: NaiveDate) -> AppResult<Self> {
        Self::new(date.year(), date.month())
            .ok_or_else(|| AppError::InvalidDate(date.to_string()))
    }

    pub fn current() -> AppResult<Self> {
        Self::of(today())
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();
        let first = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        Self::of(first)
    }

    /// `--month` argument, defaulting to the current month.
    pub fn resolve(arg: Option<&str>) -> AppResult<Self> {
        match arg {
            Some(m) => Self::parse(m),
            None => Self::current(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match date.and_hms_milli_opt(0, 0, 0, 0) {
            Some(dt) => dt >= self.start && dt <= self.end,
            None => false,
        }
    }

    /// `YYYY-MM`
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// `March 2025`
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}
