//! Helper utilities.

pub mod time;

pub use time::{TimeParseError, format_timestamp, leading_date, parse_date, parse_timestamp};
