//! Error record as displayed in the dashboard table.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Severity, SortField, Status};
use crate::util::parse_timestamp;

/// One error/log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct Record {
    /// Unique within a collection, e.g. `ERR-1001`.
    pub id: String,
    /// ISO-like timestamp, e.g. `2025-03-06 08:32:15`.
    pub timestamp: String,
    /// Error type, e.g. `DatabaseError`.
    #[serde(rename = "type")]
    pub category: String,
    pub message: String,
    pub severity: Severity,
    pub status: Status,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        timestamp: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        status: Status,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: timestamp.into(),
            category: category.into(),
            message: message.into(),
            severity,
            status,
        }
    }

    /// Case-insensitive substring match against id, category and message.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.id.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.message.to_lowercase().contains(needle)
    }

    /// Chronological sort key for the timestamp column.
    pub fn timestamp_key(&self) -> TimestampKey<'_> {
        match parse_timestamp(&self.timestamp) {
            Ok(dt) => TimestampKey::Parsed(dt),
            Err(_) => TimestampKey::Raw(&self.timestamp),
        }
    }

    /// Compare two records on a single column (ascending).
    ///
    /// Severity and status compare by their lowercase labels.
    pub fn cmp_by(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Id => self.id.cmp(&other.id),
            SortField::Timestamp => self.timestamp_key().cmp(&other.timestamp_key()),
            SortField::Category => self.category.cmp(&other.category),
            SortField::Message => self.message.cmp(&other.message),
            SortField::Severity => self.severity.as_str().cmp(other.severity.as_str()),
            SortField::Status => self.status.as_str().cmp(other.status.as_str()),
        }
    }

    /// Guess the technology stack from the error type, for the detail view.
    pub fn technology_hint(&self) -> &'static str {
        let c = self.category.as_str();
        if c.contains("Database") {
            "PostgreSQL"
        } else if c.contains("Memory") {
            "Node.js"
        } else if c.contains("Network") {
            "API Service"
        } else if c.contains("Syntax") {
            "JavaScript"
        } else if c.contains("Authentication") {
            "Auth Service"
        } else {
            "Unknown"
        }
    }
}

/// Timestamp ordering key: unparseable values sort first, lexically among
/// themselves; parsed values sort chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimestampKey<'a> {
    Raw(&'a str),
    Parsed(NaiveDateTime),
}
