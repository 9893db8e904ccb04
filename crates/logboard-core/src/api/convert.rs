//! TabularView → ApiPage conversion.

use super::snapshot::{ApiPage, ApiPagination};
use crate::view::TabularView;

/// Snapshot the current page of `view` for JSON clients.
pub fn build_page(view: &TabularView) -> ApiPage {
    let summary = view.summary();
    let range = view.page_range();

    ApiPage {
        items: view.current_page_items().into_iter().cloned().collect(),
        pagination: ApiPagination {
            current_page: summary.current_page,
            total_pages: summary.total_pages,
            page_size: view.page_size(),
            total_filtered: summary.total_filtered,
            total_unfiltered: summary.total_unfiltered,
            first: range.map(|(first, _)| first),
            last: range.map(|(_, last)| last),
            is_first_page: view.is_first_page(),
            is_last_page: view.is_last_page(),
        },
        severity_counts: summary.severity_counts,
        status_counts: summary.status_counts,
        state: view.view_state().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{generate_records, sample_records};
    use crate::models::Severity;

    #[test]
    fn test_page_json_shape() {
        let mut view = TabularView::new();
        view.load(generate_records(25));
        view.set_page(3);
        let page = build_page(&view);
        assert_eq!(page.items.len(), 5);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pagination"]["current_page"], 3);
        assert_eq!(json["pagination"]["first"], 21);
        assert_eq!(json["pagination"]["last"], 25);
        assert_eq!(json["pagination"]["is_last_page"], true);
        assert_eq!(json["items"][0]["type"], "GeneratedError");
        assert!(json["state"].get("needle").is_none());
    }

    #[test]
    fn test_empty_filter_omits_range() {
        let mut view = TabularView::new();
        view.load(sample_records());
        view.set_filter("no such thing", Some(Severity::Warning), None);
        let json = serde_json::to_value(build_page(&view)).unwrap();
        assert!(json["pagination"].get("first").is_none());
        assert_eq!(json["pagination"]["total_pages"], 1);
        assert_eq!(json["severity_counts"]["critical"], 3);
        assert_eq!(json["state"]["severity_filter"], "warning");
    }
}
