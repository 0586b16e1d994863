//! UI-agnostic view model types.
//!
//! These types carry presentation data without depending on a rendering
//! framework. The TUI maps them to ratatui styles; the plain-text printer
//! ignores styling altogether.

use crate::sort::{ColumnSelector, SortState};

/// Semantic style of a row or cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// TUI: green. Checked-in marker.
    Positive,
    /// TUI: red. Not checked in.
    Critical,
    /// TUI: dark gray. Placeholders such as pictures.
    Dimmed,
}

/// Cell text, optionally styled apart from its row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCell {
    pub text: String,
    /// Falls back to the row style when unset.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: RowStyleClass) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }
}

/// One sortable column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHeader {
    /// Title followed by the sort indicator, if any.
    pub label: String,
    pub selector: ColumnSelector,
    pub sort: SortState,
    /// Under the keyboard cursor.
    pub focused: bool,
}

/// Displayed row keyed by the participant it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Everything the TUI and the text printer need to draw one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel<Id> {
    pub title: String,
    /// Participant counter shown next to the title.
    pub counter: String,
    pub headers: Vec<ViewHeader>,
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow<Id>>,
    /// Line shown under the rows.
    pub footer: Option<String>,
    /// Shown instead of the table when there are no rows.
    pub empty_message: Option<String>,
}
