//! API page payload.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Record;
use crate::summary::{SeverityCounts, StatusCounts};
use crate::table::ViewState;

/// Top-level payload sent to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiPage {
    /// Rows of the current page, in display order.
    pub items: Vec<Record>,
    pub pagination: ApiPagination,
    /// Over the unfiltered collection.
    pub severity_counts: SeverityCounts,
    /// Over the unfiltered collection.
    pub status_counts: StatusCounts,
    pub state: ViewState,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiPagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_filtered: usize,
    pub total_unfiltered: usize,
    /// 1-based position of the first visible row. Absent when nothing matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<usize>,
    /// 1-based position of the last visible row. Absent when nothing matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<usize>,
    pub is_first_page: bool,
    pub is_last_page: bool,
}
