//! Lenient timestamp parser for record timestamps.
//!
//! Record timestamps come from heterogeneous log sources, so ordering by
//! string comparison is not reliable. Supported formats:
//! - Space separated: `2025-03-06 08:32:15`, `2025-03-06 8:32:15`, `2025-03-06 08:32`
//! - ISO 8601: `2025-03-06T08:32:15`, with optional fraction
//! - RFC 3339 with offset: `2025-03-06T08:32:15+02:00` (normalized to UTC)
//! - Date only: `2025-03-06` (midnight)

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Error type for timestamp parsing failures.
#[derive(Debug, Clone, Error)]
#[error("failed to parse timestamp '{input}'")]
pub struct TimeParseError {
    pub input: String,
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Parse a record timestamp into a naive (UTC) datetime.
///
/// Hours, minutes and seconds do not need to be zero-padded:
/// `2025-03-06 9:00:00` parses to the same value as `2025-03-06 09:00:00`.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, TimeParseError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        && let Some(dt) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(dt);
    }

    Err(TimeParseError {
        input: input.to_string(),
    })
}

/// Calendar date of a timestamp, if it parses.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    parse_timestamp(input).ok().map(|dt| dt.date())
}

/// Date written at the start of a timestamp, ignoring any time or offset
/// that follows (`2025-03-06T23:30:00-05:00` is 2025-03-06).
pub fn leading_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_and_remainder(input.trim(), "%Y-%m-%d")
        .ok()
        .map(|(date, _)| date)
}

/// Format a datetime the way records carry it (`YYYY-MM-DD HH:MM:SS`).
pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
