use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a calendar date from `YYYY-MM-DD`, an RFC 3339 timestamp, or a
/// local `YYYY-MM-DDTHH:MM:SS[.fff]` timestamp without an offset.
///
/// Timestamps keep the date as written, without shifting to another zone.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Format a date in US-English long form, e.g. "March 20, 2024".
pub fn format_long_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => {
            log::debug!("Unparseable date string: {:?}", raw);
            INVALID_DATE.to_string()
        }
    }
}

/// Format an inclusive date range, e.g. "March 1, 2024 - April 30, 2024".
pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_long_date(start), format_long_date(end))
}
