//! Table view state: filter predicate, sort column, and page position.
//!
//! `ViewState` is plain data with pure transitions. It knows nothing about
//! the records; callers pass the filtered count where pagination needs it.

use std::ops::Range;

use serde::Serialize;

use crate::config::ViewConfig;
use crate::models::{Record, Severity, SortDirection, SortField, SortIndicator, Status};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct ViewState {
    filter_text: String,
    /// Lowercased `filter_text`, used for matching.
    #[serde(skip)]
    needle: String,
    severity_filter: Option<Severity>,
    status_filter: Option<Status>,
    sort_field: Option<SortField>,
    sort_direction: SortDirection,
    page_size: usize,
    current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

impl ViewState {
    pub fn from_config(config: &ViewConfig) -> Self {
        let (sort_field, sort_direction) = match config.default_sort {
            Some(s) => (Some(s.field), s.direction),
            None => (None, SortDirection::Ascending),
        };
        Self {
            filter_text: String::new(),
            needle: String::new(),
            severity_filter: None,
            status_filter: None,
            sort_field,
            sort_direction,
            page_size: config.page_size.max(1),
            current_page: 1,
        }
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn severity_filter(&self) -> Option<Severity> {
        self.severity_filter
    }

    pub fn status_filter(&self) -> Option<Status> {
        self.status_filter
    }

    pub fn sort_field(&self) -> Option<SortField> {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// True when text, severity, and status predicates all accept `record`.
    pub fn matches(&self, record: &Record) -> bool {
        self.severity_filter.is_none_or(|s| record.severity == s)
            && self.status_filter.is_none_or(|s| record.status == s)
            && record.matches_text(&self.needle)
    }

    /// True when no predicate is active.
    pub fn is_unfiltered(&self) -> bool {
        self.needle.is_empty() && self.severity_filter.is_none() && self.status_filter.is_none()
    }

    /// Replace all three predicates. Always returns to page 1.
    pub fn set_filter(
        &mut self,
        text: &str,
        severity: Option<Severity>,
        status: Option<Status>,
    ) {
        self.filter_text = text.to_string();
        self.needle = text.to_lowercase();
        self.severity_filter = severity;
        self.status_filter = status;
        self.current_page = 1;
    }

    /// Same column toggles direction; a new column starts ascending.
    pub fn apply_sort(&mut self, field: SortField) {
        if self.sort_field == Some(field) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = Some(field);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn clear_sort(&mut self) {
        self.sort_field = None;
        self.sort_direction = SortDirection::Ascending;
    }

    pub fn sort_indicator(&self, field: SortField) -> SortIndicator {
        match (self.sort_field, self.sort_direction) {
            (Some(f), SortDirection::Ascending) if f == field => SortIndicator::Ascending,
            (Some(f), SortDirection::Descending) if f == field => SortIndicator::Descending,
            _ => SortIndicator::Unsorted,
        }
    }

    pub fn total_pages(&self, filtered: usize) -> usize {
        filtered.div_ceil(self.page_size).max(1)
    }

    /// Move to page `n`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, n: i64, filtered: usize) {
        let total = self.total_pages(filtered);
        self.current_page = if n < 1 {
            1
        } else {
            usize::try_from(n).unwrap_or(usize::MAX).min(total)
        };
    }

    /// Re-clamp after the filtered count changed underneath.
    pub fn clamp_page(&mut self, filtered: usize) {
        let total = self.total_pages(filtered);
        self.current_page = self.current_page.clamp(1, total);
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    pub fn set_page_size(&mut self, size: usize, filtered: usize) {
        self.page_size = size.max(1);
        self.clamp_page(filtered);
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self, filtered: usize) -> bool {
        self.current_page >= self.total_pages(filtered)
    }

    /// Index range of the current page within the filtered set.
    pub fn page_bounds(&self, filtered: usize) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(filtered);
        let end = start.saturating_add(self.page_size).min(filtered);
        start..end
    }
}
