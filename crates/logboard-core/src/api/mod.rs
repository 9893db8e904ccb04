//! API types for JSON serialization to a web frontend.
//!
//! One `ApiPage` carries everything the dashboard paints in one pass:
//! the visible rows, KPI counts, pagination state and the active filter.

pub mod convert;
pub mod snapshot;

pub use convert::build_page;
pub use snapshot::{ApiPage, ApiPagination};
