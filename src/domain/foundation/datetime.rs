//! Display helpers for the backend's date/time strings.
//!
//! The API sends datetimes either as RFC 3339 or in the SQL-ish
//! `YYYY-MM-DD HH:MM:SS` form. Values are shown in the wall-clock time they
//! were sent with; anything missing or unparseable renders as `TBA`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder shown when a date is missing or unreadable.
pub const TBA: &str = "TBA";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a backend datetime string.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Short date, e.g. `Oct 20, 2025`.
pub fn format_date(raw: Option<&str>) -> String {
    render(raw, "%b %-d, %Y")
}

/// Long date, e.g. `Monday, October 20, 2025`.
pub fn format_long_date(raw: Option<&str>) -> String {
    render(raw, "%A, %B %-d, %Y")
}

/// 12-hour time, e.g. `6:00 PM`.
pub fn format_time(raw: Option<&str>) -> String {
    render(raw, "%-I:%M %p")
}

fn render(raw: Option<&str>, format: &str) -> String {
    raw.and_then(parse_datetime)
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_else(|| TBA.to_string())
}
