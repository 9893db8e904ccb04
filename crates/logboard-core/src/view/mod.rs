//! Table view model over an in-memory record collection.
//!
//! [`TabularView`] owns the records and a [`ViewState`]; every query runs
//! filter → sort → paginate over the untouched backing collection.
//! [`errors::build_errors_view`] turns the current page into a
//! rendering-agnostic [`common::TableViewModel`].

pub mod common;
pub mod errors;

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::models::{
    Record, Severity, SortDirection, SortField, SortIndicator, Status, TimestampKey,
};
use crate::summary::{SeverityCounts, StatusCounts, Summary, TrendPeriod, TrendSeries, trend};
use crate::table::ViewState;

/// Base for generated record ids (`ERR-1001`, `ERR-1002`, ...).
const RECORD_ID_BASE: usize = 1000;

#[derive(Debug, Clone, Default)]
pub struct TabularView {
    /// Source order; never reordered by filtering or sorting.
    records: Vec<Record>,
    state: ViewState,
}

impl TabularView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &ViewConfig) -> Self {
        Self {
            records: Vec::new(),
            state: ViewState::from_config(config),
        }
    }

    /// Backing collection in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Replace the whole collection. Filter and sort settings are kept,
    /// the page goes back to 1.
    pub fn load(&mut self, records: impl IntoIterator<Item = Record>) {
        self.records = records.into_iter().collect();
        self.state.reset_page();

        let mut seen = HashSet::with_capacity(self.records.len());
        let duplicates = self
            .records
            .iter()
            .filter(|r| !seen.insert(r.id.as_str()))
            .count();
        if duplicates > 0 {
            warn!(duplicates, "loaded record batch contains duplicate ids");
        }
        debug!(records = self.records.len(), "record collection replaced");
    }

    /// Insert a freshly arrived record at the head of the collection.
    ///
    /// Fails with [`ViewError::DuplicateId`] and leaves the collection
    /// untouched when the id is already present. The current page is kept.
    pub fn prepend(&mut self, record: Record) -> Result<(), ViewError> {
        if self.get(&record.id).is_some() {
            warn!(id = %record.id, "rejected record with duplicate id");
            return Err(ViewError::DuplicateId(record.id));
        }
        debug!(id = %record.id, severity = %record.severity, "record prepended");
        self.records.insert(0, record);
        Ok(())
    }

    /// Replace the search text and dropdown filters. `None` means "all".
    pub fn set_filter(&mut self, text: &str, severity: Option<Severity>, status: Option<Status>) {
        self.state.set_filter(text, severity, status);
        debug!(
            text,
            severity = severity.map(|s| s.as_str()).unwrap_or("all"),
            status = status.map(|s| s.as_str()).unwrap_or("all"),
            "filter changed"
        );
    }

    /// Sort by `field`; the active field toggles direction, a new one
    /// starts ascending.
    pub fn set_sort(&mut self, field: SortField) {
        self.state.apply_sort(field);
        debug!(
            field = field.as_str(),
            direction = self.state.sort_direction().as_str(),
            "sort changed"
        );
    }

    pub fn clear_sort(&mut self) {
        self.state.clear_sort();
    }

    /// Jump to page `n`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, n: i64) {
        let filtered = self.filtered_count();
        self.state.set_page(n, filtered);
        debug!(requested = n, page = self.state.current_page(), "page changed");
    }

    pub fn next_page(&mut self) {
        if !self.is_last_page() {
            self.set_page(self.state.current_page() as i64 + 1);
        }
    }

    pub fn prev_page(&mut self) {
        if !self.is_first_page() {
            self.set_page(self.state.current_page() as i64 - 1);
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        let filtered = self.filtered_count();
        self.state.set_page_size(size, filtered);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Filtered and sorted records, unpaginated.
    pub fn filtered(&self) -> Vec<&Record> {
        let mut rows: Vec<&Record> = self
            .records
            .iter()
            .filter(|r| self.state.matches(r))
            .collect();
        if let Some(field) = self.state.sort_field() {
            sort_rows(&mut rows, field, self.state.sort_direction());
        }
        rows
    }

    pub fn filtered_count(&self) -> usize {
        self.records.iter().filter(|r| self.state.matches(r)).count()
    }

    /// Records on the current page, at most `page_size` of them.
    pub fn current_page_items(&self) -> Vec<&Record> {
        let rows = self.filtered();
        let bounds = self.state.page_bounds(rows.len());
        rows[bounds].to_vec()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages(self.filtered_count())
    }

    pub fn is_first_page(&self) -> bool {
        self.state.is_first_page()
    }

    pub fn is_last_page(&self) -> bool {
        self.state.is_last_page(self.filtered_count())
    }

    /// 1-based inclusive positions of the visible rows within the filtered
    /// set, for "showing 11-20 of 25". `None` when nothing matches.
    pub fn page_range(&self) -> Option<(usize, usize)> {
        let bounds = self.state.page_bounds(self.filtered_count());
        if bounds.is_empty() {
            None
        } else {
            Some((bounds.start + 1, bounds.end))
        }
    }

    pub fn sort_indicator(&self, field: SortField) -> SortIndicator {
        self.state.sort_indicator(field)
    }

    /// Pagination over the filtered set, KPI counts over everything.
    pub fn summary(&self) -> Summary {
        let total_filtered = self.filtered_count();
        Summary {
            total_filtered,
            total_unfiltered: self.records.len(),
            current_page: self.state.current_page(),
            total_pages: self.state.total_pages(total_filtered),
            severity_counts: SeverityCounts::from_records(&self.records),
            status_counts: StatusCounts::from_records(&self.records),
        }
    }

    /// Trend chart series over the whole collection.
    pub fn trend(&self, period: TrendPeriod, today: NaiveDate) -> TrendSeries {
        trend(&self.records, period, today)
    }

    /// Id for a newly produced analysis result: `ERR-{1000 + len + 1}`,
    /// advanced past any id already taken.
    pub fn next_record_id(&self) -> String {
        let mut n = RECORD_ID_BASE + self.records.len() + 1;
        loop {
            let id = format!("ERR-{}", n);
            if self.get(&id).is_none() {
                return id;
            }
            n += 1;
        }
    }
}

/// Stable sort of `rows` on one column.
fn sort_rows<'a>(rows: &mut Vec<&'a Record>, field: SortField, direction: SortDirection) {
    let apply = |o: Ordering| match direction {
        SortDirection::Ascending => o,
        SortDirection::Descending => o.reverse(),
    };

    if field == SortField::Timestamp {
        // Parse once per row rather than once per comparison.
        let mut keyed: Vec<(TimestampKey<'a>, &'a Record)> =
            rows.iter().map(|&r| (r.timestamp_key(), r)).collect();
        keyed.sort_by(|a, b| apply(a.0.cmp(&b.0)));
        *rows = keyed.into_iter().map(|(_, r)| r).collect();
    } else {
        rows.sort_by(|a, b| apply(a.cmp_by(b, field)));
    }
}
