//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date string in the formats found in post front-matter and the index
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_datetime(s).map(|dt| dt.date())
}

/// Parse a date or timestamp, keeping the time of day as written.
///
/// Date-only strings fall on midnight. Reduced ISO 8601 precision is
/// accepted: `2024-03` is March 1 and `2024` is January 1.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    // RFC 3339 / ISO 8601 with offset, wall clock as written
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    parse_reduced(s).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `YYYY-MM` or `YYYY`
fn parse_reduced(s: &str) -> Option<NaiveDate> {
    let digits =
        |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());

    match s.split_once('-') {
        Some((year, month)) if digits(year, 4) && digits(month, 2) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        None if digits(s, 4) => NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1),
        _ => None,
    }
}

/// Format a date in long form (like "January 5, 2024")
pub fn long_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
