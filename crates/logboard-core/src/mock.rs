//! Sample dataset and record batch decoding.
//!
//! `sample_records` is the dataset the dashboard shows before any analysis
//! has been run. `generate_records` builds synthetic batches for paging.

use chrono::{Duration, NaiveDate};

use crate::error::ViewError;
use crate::models::{Record, Severity, Status};
use crate::util::format_timestamp;

/// Decode a JSON array of records (dashboard field names, `type` for category).
pub fn records_from_json(json: &str) -> Result<Vec<Record>, ViewError> {
    Ok(serde_json::from_str(json)?)
}

/// The eight demo errors shown on first load.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(
            "ERR-1001",
            "2025-03-06 08:32:15",
            "DatabaseError",
            "Connection timeout: failed to connect to database after 30s",
            Severity::Critical,
            Status::New,
        ),
        Record::new(
            "ERR-1002",
            "2025-03-06 09:14:22",
            "MemoryError",
            "Out of memory: Killed process 12345 (node)",
            Severity::Error,
            Status::Investigating,
        ),
        Record::new(
            "ERR-1003",
            "2025-03-06 10:05:51",
            "NetworkError",
            "Unable to connect to external API: Connection refused",
            Severity::Warning,
            Status::Resolved,
        ),
        Record::new(
            "ERR-1004",
            "2025-03-05 14:32:10",
            "SyntaxError",
            "Unexpected token in JSON at position 43",
            Severity::Error,
            Status::New,
        ),
        Record::new(
            "ERR-1005",
            "2025-03-05 16:45:33",
            "AuthenticationError",
            "Invalid credentials: token expired",
            Severity::Critical,
            Status::Investigating,
        ),
        Record::new(
            "ERR-1006",
            "2025-03-04 11:23:05",
            "ValidationError",
            "Required field \"user_id\" is missing",
            Severity::Warning,
            Status::Resolved,
        ),
        Record::new(
            "ERR-1007",
            "2025-03-04 09:17:40",
            "ConfigurationError",
            "Invalid environment variable: REDIS_URL not defined",
            Severity::Error,
            Status::Resolved,
        ),
        Record::new(
            "ERR-1008",
            "2025-03-03 17:56:12",
            "PermissionError",
            "Access denied: user lacks required permission \"admin:write\"",
            Severity::Critical,
            Status::New,
        ),
    ]
}

/// `n` synthetic records with ids `GEN-0001..`, one minute apart,
/// cycling through severities and statuses.
pub fn generate_records(n: usize) -> Vec<Record> {
    let base = NaiveDate::from_ymd_opt(2025, 3, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    (0..n)
        .map(|i| {
            Record::new(
                format!("GEN-{:04}", i + 1),
                format_timestamp(base + Duration::minutes(i as i64)),
                "GeneratedError",
                format!("generated record {}", i + 1),
                Severity::ALL[i % Severity::ALL.len()],
                Status::ALL[i % Status::ALL.len()],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_unique() {
        let records = sample_records();
        let ids: HashSet<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_generate_records() {
        let records = generate_records(25);
        assert_eq!(records.len(), 25);
        assert_eq!(records[0].id, "GEN-0001");
        assert_eq!(records[24].id, "GEN-0025");
        assert_eq!(records[1].timestamp, "2025-03-01 00:01:00");
        assert_eq!(records[1].severity, Severity::Error);
        // Rolls over midnight.
        assert_eq!(generate_records(1441)[1440].timestamp, "2025-03-02 00:00:00");
    }

    #[test]
    fn test_records_from_json() {
        let json = r#"[
            {"id": "ERR-1", "timestamp": "2025-03-06 08:00:00", "type": "DatabaseError",
             "message": "down", "severity": "critical", "status": "new"}
        ]"#;
        let records = records_from_json(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "DatabaseError");
        assert_eq!(records[0].severity, Severity::Critical);
    }

    #[test]
    fn test_records_from_json_rejects_unknown_severity() {
        let json = r#"[
            {"id": "ERR-1", "timestamp": "", "type": "X",
             "message": "", "severity": "fatal", "status": "new"}
        ]"#;
        assert!(matches!(
            records_from_json(json),
            Err(ViewError::InvalidRecords(_))
        ));
    }
}
