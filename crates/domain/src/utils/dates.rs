//! Lenient date parsing for records fetched from the remote API
//!
//! The API is not consistent about date formats: some documents carry full
//! RFC 3339 timestamps, older ones a naive `YYYY-MM-DD HH:MM:SS`, and
//! purchase dates are usually a bare calendar date. All naive values are
//! interpreted as UTC.

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a record timestamp.
///
/// Accepts RFC 3339, naive date-times and bare dates (midnight UTC).
///
/// # Examples
///
/// ```
/// use netasset_domain::utils::dates::parse_record_timestamp;
///
/// assert!(parse_record_timestamp("2024-05-01T08:30:00+07:00").is_some());
/// assert!(parse_record_timestamp("2024-05-01 08:30:00").is_some());
/// assert!(parse_record_timestamp("2024-05-01").is_some());
/// assert!(parse_record_timestamp("yesterday").is_none());
/// ```
#[must_use]
pub fn parse_record_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a calendar date, dropping any time component.
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| parse_record_timestamp(raw).map(|ts| ts.date_naive()))
}

/// Whole calendar months elapsed from `from` to `to`.
///
/// A month counts once the same day-of-month is reached; when the start day
/// does not exist in the target month the month end is used (Jan 31 → Feb 28
/// is one month). Returns 0 when `to` precedes `from`.
#[must_use]
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }

    let span = (to.year_month_index() - from.year_month_index()).max(0);
    let mut months = u32::try_from(span).unwrap_or(0);
    while months > 0 {
        match from.checked_add_months(Months::new(months)) {
            Some(anniversary) if anniversary <= to => break,
            _ => months -= 1,
        }
    }
    months
}

trait YearMonthIndex {
    fn year_month_index(&self) -> i64;
}

impl YearMonthIndex for NaiveDate {
    fn year_month_index(&self) -> i64 {
        use chrono::Datelike;
        i64::from(self.year()) * 12 + i64::from(self.month0())
    }
}
