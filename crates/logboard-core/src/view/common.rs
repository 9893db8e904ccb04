//! UI-agnostic view model types.
//!
//! These types carry presentation data without depending on a rendering
//! framework. A web frontend maps [`RowStyleClass`] to CSS badge classes,
//! a terminal one to colors.

use serde::Serialize;

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Warning level (web: orange badge).
    Warning,
    /// Critical level (web: red badge).
    Critical,
    /// Dimmed, e.g. resolved entries.
    Dimmed,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// One table row, parameterized by entity ID type.
#[derive(Debug, Clone, Serialize)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone, Serialize)]
pub struct TableViewModel<Id> {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<ViewRow<Id>>,
    /// Header index of the active sort column.
    pub sort_column: Option<usize>,
    pub sort_ascending: bool,
    /// Footer text, e.g. `Page 2 of 3`.
    pub page_info: String,
    /// Visible rows within the filtered set, e.g. `11-20`.
    pub showing: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}
