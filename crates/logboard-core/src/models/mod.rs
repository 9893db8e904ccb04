//! Record model, severity/status enums, and sort keys.

mod record;

pub use record::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ViewError;

/// Error severity, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Error,
    Warning,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Error, Severity::Warning];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            _ => Err(ViewError::UnknownSeverity(s.to_string())),
        }
    }
}

/// Triage status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Status {
    New,
    Investigating,
    Resolved,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::New, Status::Investigating, Status::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Investigating => "investigating",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "investigating" => Ok(Self::Investigating),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ViewError::UnknownStatus(s.to_string())),
        }
    }
}

/// Parse a severity dropdown value. `"all"` (or empty) means no filter.
pub fn parse_severity_filter(s: &str) -> Result<Option<Severity>, ViewError> {
    match s.trim() {
        "" => Ok(None),
        v if v.eq_ignore_ascii_case("all") => Ok(None),
        v => v.parse().map(Some),
    }
}

/// Parse a status dropdown value. `"all"` (or empty) means no filter.
pub fn parse_status_filter(s: &str) -> Result<Option<Status>, ViewError> {
    match s.trim() {
        "" => Ok(None),
        v if v.eq_ignore_ascii_case("all") => Ok(None),
        v => v.parse().map(Some),
    }
}

/// Sortable record column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    Timestamp,
    /// Serialized as `type`, matching the table header's `data-sort` key.
    #[serde(rename = "type")]
    Category,
    Message,
    Severity,
    Status,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::Timestamp,
        SortField::Category,
        SortField::Message,
        SortField::Severity,
        SortField::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Timestamp => "timestamp",
            Self::Category => "type",
            Self::Message => "message",
            Self::Severity => "severity",
            Self::Status => "status",
        }
    }
}

impl FromStr for SortField {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "timestamp" => Ok(Self::Timestamp),
            "type" | "category" => Ok(Self::Category),
            "message" => Ok(Self::Message),
            "severity" => Ok(Self::Severity),
            "status" => Ok(Self::Status),
            _ => Err(ViewError::UnknownSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Header icon state for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse() {
        assert_eq!("critical".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!(" Warning ".parse::<Severity>().unwrap(), Severity::Warning);
        assert!(matches!(
            "fatal".parse::<Severity>(),
            Err(ViewError::UnknownSeverity(_))
        ));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("investigating".parse::<Status>().unwrap(), Status::Investigating);
        assert!(matches!(
            "closed".parse::<Status>(),
            Err(ViewError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_filter_all() {
        assert_eq!(parse_severity_filter("all").unwrap(), None);
        assert_eq!(parse_severity_filter("ALL").unwrap(), None);
        assert_eq!(parse_status_filter("").unwrap(), None);
        assert_eq!(
            parse_status_filter("resolved").unwrap(),
            Some(Status::Resolved)
        );
        assert!(parse_severity_filter("bogus").is_err());
    }

    #[test]
    fn test_sort_field_aliases() {
        assert_eq!("type".parse::<SortField>().unwrap(), SortField::Category);
        assert_eq!("category".parse::<SortField>().unwrap(), SortField::Category);
        for field in SortField::ALL {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
        }
        assert!(matches!(
            "level".parse::<SortField>(),
            Err(ViewError::UnknownSortField(_))
        ));
    }

    #[test]
    fn test_severity_order_most_severe_first() {
        assert!(Severity::Critical < Severity::Error);
        assert!(Severity::Error < Severity::Warning);
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let s: Status = serde_json::from_str("\"new\"").unwrap();
        assert_eq!(s, Status::New);
        let f: SortField = serde_json::from_str("\"type\"").unwrap();
        assert_eq!(f, SortField::Category);
    }
}
