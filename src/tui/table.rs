//! Participant table widget state: sorting, header cursor, selection tracking.

use ratatui::widgets::TableState as RatatuiTableState;

use crate::model::{CHECKED_IN_FIELD, ParticipantTable, Row};
use crate::sort::{Collator, ColumnSelector, SortError, SortState, TableSorter};

/// State for one participant table in the accordion.
#[derive(Debug)]
pub struct ParticipantTableState {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub num_participants: usize,
    pub show_checkin: bool,
    pub sorter: TableSorter<Row>,
    /// Selected row index (in display order).
    pub selected: usize,
    /// Tracked participant id: follows the selected row across re-sorts.
    pub tracked_id: Option<u64>,
    /// Keyboard cursor over [`Self::selectors`].
    pub cursor: usize,
    /// Accordion body visible.
    pub expanded: bool,
    /// Whether the accordion title toggles `expanded`.
    pub collapsible: bool,
    pub ratatui_state: RatatuiTableState,
}

impl ParticipantTableState {
    pub fn new(table: ParticipantTable, collapsible: bool, collator: Collator) -> Self {
        let expanded = !collapsible || !table.rows.is_empty();
        Self {
            title: table.title,
            headers: table.headers,
            num_participants: table.num_participants,
            show_checkin: table.show_checkin,
            sorter: TableSorter::new(table.rows).with_collator(collator),
            selected: 0,
            tracked_id: None,
            cursor: 0,
            expanded,
            collapsible,
            ratatui_state: RatatuiTableState::default(),
        }
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[Row] {
        self.sorter.rows()
    }

    pub fn visible_count(&self) -> usize {
        self.sorter.original().len()
    }

    pub fn hidden_count(&self) -> usize {
        self.num_participants.saturating_sub(self.visible_count())
    }

    /// Sortable headers in display order: check-in first when shown, then
    /// one per header title.
    pub fn selectors(&self) -> Vec<ColumnSelector> {
        let checkin = self
            .show_checkin
            .then(|| ColumnSelector::field(CHECKED_IN_FIELD));
        checkin
            .into_iter()
            .chain((0..self.headers.len()).map(ColumnSelector::Column))
            .collect()
    }

    /// Selector under the header cursor.
    pub fn cursor_selector(&self) -> Option<ColumnSelector> {
        self.selectors().into_iter().nth(self.cursor)
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let max = self.selectors().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(max);
    }

    /// Maps a user-supplied column name to a selector.
    ///
    /// Accepts a cell index, the check-in field name, or a header title
    /// (case-insensitive). Anything else is passed through as a field name.
    pub fn resolve_selector(&self, name: &str) -> ColumnSelector {
        let name = name.trim();
        if let Ok(selector @ ColumnSelector::Column(_)) = name.parse::<ColumnSelector>() {
            return selector;
        }
        if name.eq_ignore_ascii_case(CHECKED_IN_FIELD) {
            return ColumnSelector::field(CHECKED_IN_FIELD);
        }
        let lowered = name.to_lowercase();
        match self
            .headers
            .iter()
            .position(|h| h.trim().to_lowercase() == lowered)
        {
            Some(index) => ColumnSelector::Column(index),
            None => ColumnSelector::field(name),
        }
    }

    /// Handles a header interaction, keeping the selected participant selected.
    pub fn sort_by(&mut self, selector: ColumnSelector) -> Result<SortState, SortError> {
        if self.tracked_id.is_none() {
            self.tracked_id = self.rows().get(self.selected).map(|r| r.id);
        }
        let cursor = self.selectors().iter().position(|s| *s == selector);
        let state = self.sorter.toggle(selector)?;
        if let Some(cursor) = cursor {
            self.cursor = cursor;
        }
        self.resolve_selection();
        Ok(state)
    }

    /// Sorts by the header under the cursor.
    pub fn sort_at_cursor(&mut self) -> Option<Result<SortState, SortError>> {
        let selector = self.cursor_selector()?;
        Some(self.sort_by(selector))
    }

    /// Restores the original row order.
    pub fn reset_sort(&mut self) {
        if self.tracked_id.is_none() {
            self.tracked_id = self.rows().get(self.selected).map(|r| r.id);
        }
        self.sorter.reset();
        self.resolve_selection();
    }

    /// Flips the accordion body. No-op for a non-collapsible table.
    pub fn toggle_expanded(&mut self) -> bool {
        if self.collapsible {
            self.expanded = !self.expanded;
        }
        self.expanded
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.rows().get(self.selected)
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.tracked_id = None;
    }

    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
        self.tracked_id = None;
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        self.tracked_id = None;
    }

    pub fn page_down(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_add(page_size);
        self.tracked_id = None;
    }

    pub fn home(&mut self) {
        self.selected = 0;
        self.tracked_id = None;
    }

    pub fn end(&mut self) {
        self.selected = usize::MAX;
        self.tracked_id = None;
    }

    /// Resolves selection after navigation or sorting.
    ///
    /// If the tracked participant is still listed, moves `selected` to its
    /// new index. Otherwise clamps `selected`. Always refreshes `tracked_id`
    /// from the resulting row and syncs the ratatui state.
    pub fn resolve_selection(&mut self) {
        let ids: Vec<u64> = self.rows().iter().map(|r| r.id).collect();
        if ids.is_empty() {
            self.selected = 0;
            self.tracked_id = None;
            self.ratatui_state.select(None);
            return;
        }

        if let Some(tid) = self.tracked_id
            && let Some(pos) = ids.iter().position(|&id| id == tid)
        {
            self.selected = pos;
        }

        self.selected = self.selected.min(ids.len() - 1);
        self.tracked_id = Some(ids[self.selected]);
        self.ratatui_state.select(Some(self.selected));
    }
}
