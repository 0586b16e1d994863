//! Viewer state: the accordion of participant tables and popups.

use tracing::{debug, warn};

use crate::model::ParticipantTable;
use crate::sort::{Collator, ColumnSelector, SortError, SortState};
use crate::view::participants::sort_indicator;

use super::table::ParticipantTableState;

/// Screen region of one rendered column header, refreshed on every draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderHitbox {
    /// Index into [`AppState::tables`].
    pub table: usize,
    pub y: u16,
    pub x: u16,
    pub width: u16,
    pub selector: ColumnSelector,
}

impl HeaderHitbox {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        y == self.y && x >= self.x && x < self.x.saturating_add(self.width)
    }
}

/// Status line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Complete viewer state.
#[derive(Debug)]
pub struct AppState {
    pub tables: Vec<ParticipantTableState>,
    /// Table receiving keyboard input.
    pub focused: usize,
    /// Where the tables were loaded from, shown in the top bar.
    pub source: String,
    pub show_help: bool,
    pub help_scroll: usize,
    pub status: Option<Status>,
    pub header_hitboxes: Vec<HeaderHitbox>,
    /// Visible body rows of the focused table, used for paging.
    pub page_size: usize,
}

impl AppState {
    /// A lone table is always expanded; several tables form a collapsible
    /// accordion.
    pub fn new(tables: Vec<ParticipantTable>, source: impl Into<String>, collator: Collator) -> Self {
        let collapsible = tables.len() != 1;
        let mut tables: Vec<ParticipantTableState> = tables
            .into_iter()
            .map(|t| ParticipantTableState::new(t, collapsible, collator))
            .collect();
        for table in &mut tables {
            table.resolve_selection();
        }
        Self {
            tables,
            focused: 0,
            source: source.into(),
            show_help: false,
            help_scroll: 0,
            status: None,
            header_hitboxes: Vec::new(),
            page_size: 10,
        }
    }

    pub fn focused_table(&self) -> Option<&ParticipantTableState> {
        self.tables.get(self.focused)
    }

    pub fn focused_table_mut(&mut self) -> Option<&mut ParticipantTableState> {
        self.tables.get_mut(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.tables.is_empty() {
            self.focused = (self.focused + 1) % self.tables.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.tables.is_empty() {
            self.focused = (self.focused + self.tables.len() - 1) % self.tables.len();
        }
    }

    /// Sorts the focused table by `selector`.
    pub fn sort_focused(&mut self, selector: ColumnSelector) {
        self.sort_table(self.focused, selector);
    }

    /// Sorts the focused table by its header cursor.
    pub fn sort_focused_at_cursor(&mut self) {
        if let Some(selector) = self.focused_table().and_then(|t| t.cursor_selector()) {
            self.sort_focused(selector);
        }
    }

    /// Applies a header interaction to table `index` and reports the
    /// outcome in the status line.
    pub fn sort_table(&mut self, index: usize, selector: ColumnSelector) {
        let Some(table) = self.tables.get_mut(index) else {
            return;
        };
        let label = column_label(table, &selector);
        let result = table.sort_by(selector);
        self.report_sort(&label, result);
    }

    fn report_sort(&mut self, label: &str, result: Result<SortState, SortError>) {
        self.status = Some(match result {
            Ok(SortState::Unsorted) => Status::Info("Original order restored".to_string()),
            Ok(state) => Status::Info(format!("Sorted by {} {}", label, sort_indicator(state))),
            Err(e) => {
                warn!(column = label, error = %e, "sort rejected");
                Status::Error(format!("Cannot sort by {}: {}", label, e))
            }
        });
    }

    /// Restores the original order of the focused table.
    pub fn reset_focused(&mut self) {
        if let Some(table) = self.focused_table_mut() {
            table.reset_sort();
            self.status = Some(Status::Info("Original order restored".to_string()));
        }
    }

    /// Handles a left click. Returns `true` when it hit a column header.
    pub fn click(&mut self, x: u16, y: u16) -> bool {
        let Some(hit) = self
            .header_hitboxes
            .iter()
            .find(|h| h.contains(x, y))
            .cloned()
        else {
            return false;
        };
        debug!(table = hit.table, column = %hit.selector, "header clicked");
        self.focused = hit.table;
        self.sort_table(hit.table, hit.selector);
        true
    }
}

/// Human-readable name of a sort column.
fn column_label(table: &ParticipantTableState, selector: &ColumnSelector) -> String {
    match selector {
        ColumnSelector::Column(index) => table
            .headers
            .get(*index)
            .cloned()
            .unwrap_or_else(|| format!("column {}", index + 1)),
        ColumnSelector::Field(name) => name.replace('_', "-"),
    }
}
