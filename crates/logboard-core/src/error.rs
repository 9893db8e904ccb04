//! Error taxonomy for the view layer.

use thiserror::Error;

/// Errors surfaced to the caller of the view model.
///
/// Only [`ViewError::DuplicateId`] can come out of a `TabularView`
/// operation; the remaining variants come from parsing labels and
/// record batches handed over by the UI or the ingest layer.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A record with this id is already present in the collection.
    #[error("record with id '{0}' already exists")]
    DuplicateId(String),

    #[error("unknown severity '{0}' (expected critical, error or warning)")]
    UnknownSeverity(String),

    #[error("unknown status '{0}' (expected new, investigating or resolved)")]
    UnknownStatus(String),

    #[error("unknown sort field '{0}'")]
    UnknownSortField(String),

    /// Record batch could not be decoded.
    #[error("invalid record batch: {0}")]
    InvalidRecords(#[from] serde_json::Error),
}
