//! logboard-core: view model library for the error-log dashboard.
//!
//! Provides:
//! - `models`: error record, severity/status enums, sort keys
//! - `table`: view state (filter, sort, page) with pure transitions
//! - `view`: `TabularView` and the UI-agnostic table view model
//! - `summary`: KPI counts and trend chart series
//! - `config`: view defaults supplied by the embedding application
//! - `fmt`: label and pagination text helpers
//! - `mock`: sample dataset and record batch decoding
//! - `util`: timestamp parsing
//!
//! With `api` feature:
//! - `api`: JSON-serializable page payload with OpenAPI schemas

pub mod config;
pub mod error;
pub mod fmt;
pub mod mock;
pub mod models;
pub mod summary;
pub mod table;
pub mod util;
pub mod view;

#[cfg(feature = "api")]
pub mod api;

pub use config::ViewConfig;
pub use error::ViewError;
pub use models::{Record, Severity, SortDirection, SortField, Status};
pub use summary::Summary;
pub use table::ViewState;
pub use view::TabularView;
