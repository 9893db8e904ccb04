//! View configuration supplied by the embedding application.

use serde::Deserialize;

use crate::models::{SortDirection, SortField};

/// Rows per page in the dashboard table.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Initial settings for a [`crate::view::TabularView`].
///
/// All fields are optional when deserializing; missing ones take the
/// dashboard defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Values below 1 are clamped to 1.
    pub page_size: usize,
    pub default_sort: Option<DefaultSort>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DefaultSort {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: None,
        }
    }
}
