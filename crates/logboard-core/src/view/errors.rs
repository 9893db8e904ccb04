//! Errors table view model.

use crate::fmt::{capitalize, page_info, showing_range};
use crate::models::{Record, Severity, SortDirection, SortField, Status};
use crate::view::TabularView;
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

const HEADERS: &[&str] = &["ID", "TIMESTAMP", "TYPE", "MESSAGE", "SEVERITY", "STATUS"];

/// Header order of the sortable columns.
const COLUMNS: [SortField; 6] = [
    SortField::Id,
    SortField::Timestamp,
    SortField::Category,
    SortField::Message,
    SortField::Severity,
    SortField::Status,
];

fn severity_style(severity: Severity) -> RowStyleClass {
    match severity {
        Severity::Critical => RowStyleClass::Critical,
        Severity::Error => RowStyleClass::Warning,
        Severity::Warning => RowStyleClass::Normal,
    }
}

fn build_row(r: &Record) -> ViewRow<String> {
    let style = if r.status == Status::Resolved {
        RowStyleClass::Dimmed
    } else {
        severity_style(r.severity)
    };

    ViewRow {
        id: r.id.clone(),
        cells: vec![
            ViewCell::plain(r.id.clone()),
            ViewCell::plain(r.timestamp.clone()),
            ViewCell::plain(r.category.clone()),
            ViewCell::plain(r.message.clone()),
            ViewCell::styled(capitalize(r.severity.as_str()), severity_style(r.severity)),
            ViewCell::plain(capitalize(r.status.as_str())),
        ],
        style,
    }
}

/// Builds a UI-agnostic view model of the current page.
pub fn build_errors_view(view: &TabularView) -> TableViewModel<String> {
    let state = view.view_state();
    let summary = view.summary();

    let rows: Vec<ViewRow<String>> = view
        .current_page_items()
        .into_iter()
        .map(build_row)
        .collect();

    let sort_info = state
        .sort_field()
        .map(|f| format!(", sort: {} {}", f.as_str(), state.sort_direction().as_str()))
        .unwrap_or_default();

    let filter_info = if state.filter_text().is_empty() {
        String::new()
    } else {
        format!(" [filter: {}]", state.filter_text())
    };

    let title = format!(
        "Errors ({} of {}, page {}/{}{sort_info}){filter_info}",
        summary.total_filtered, summary.total_unfiltered, summary.current_page, summary.total_pages,
    );

    TableViewModel {
        title,
        headers: HEADERS.iter().map(|s| s.to_string()).collect(),
        rows,
        sort_column: state
            .sort_field()
            .and_then(|f| COLUMNS.iter().position(|c| *c == f)),
        sort_ascending: state.sort_direction() == SortDirection::Ascending,
        page_info: page_info(summary.current_page, summary.total_pages),
        showing: showing_range(view.page_range()),
        prev_enabled: !view.is_first_page(),
        next_enabled: !view.is_last_page(),
    }
}
