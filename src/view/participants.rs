//! Participant table view model.

use unicode_width::UnicodeWidthStr;

use crate::sort::{ColumnSelector, SortState};
use crate::tui::ParticipantTableState;
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewHeader, ViewRow};

/// Title used when the registration form has none.
pub const DEFAULT_TITLE: &str = "Participants";
pub const NO_PARTICIPANTS: &str = "No participants registered";

const CHECKIN_HEADER: &str = "✓";
const CHECKED_IN: &str = "✓";
const NOT_CHECKED_IN: &str = "✗";
const PICTURE: &str = "[image]";

const MIN_WIDTH: u16 = 3;
const MAX_WIDTH: u16 = 32;

/// Header suffix for a sort state.
pub fn sort_indicator(state: SortState) -> &'static str {
    match state {
        SortState::Ascending => "▲",
        SortState::Descending => "▼",
        SortState::Unsorted => "",
    }
}

/// Message for participants who registered without appearing in the list.
pub fn anonymous_message(count: usize) -> String {
    if count == 1 {
        "1 participant registered anonymously.".to_string()
    } else {
        format!("{} participants registered anonymously.", count)
    }
}

/// Counter shown next to the table title.
pub fn counter_label(total: usize, hidden: usize) -> String {
    let noun = if total == 1 { "participant" } else { "participants" };
    if hidden > 0 {
        format!("{} {} ({} hidden)", total, noun, hidden)
    } else {
        format!("{} {}", total, noun)
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Builds a UI-agnostic view model for one participant table.
pub fn build_participant_view(state: &ParticipantTableState) -> TableViewModel<u64> {
    let title = state
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();
    let hidden = state.hidden_count();

    let headers: Vec<ViewHeader> = state
        .selectors()
        .into_iter()
        .enumerate()
        .map(|(i, selector)| {
            let title = match &selector {
                ColumnSelector::Column(index) => {
                    state.headers.get(*index).map(String::as_str).unwrap_or("")
                }
                ColumnSelector::Field(_) => CHECKIN_HEADER,
            };
            let sort = state.sorter.state_for(&selector);
            ViewHeader {
                label: format!("{}{}", title, sort_indicator(sort)),
                selector,
                sort,
                focused: i == state.cursor,
            }
        })
        .collect();

    let rows: Vec<ViewRow<u64>> = state
        .rows()
        .iter()
        .map(|row| {
            let checkin = state.show_checkin.then(|| {
                if row.checked_in {
                    ViewCell::styled(CHECKED_IN, RowStyleClass::Positive)
                } else {
                    ViewCell::styled(NOT_CHECKED_IN, RowStyleClass::Critical)
                }
            });
            let cells = checkin
                .into_iter()
                .chain(row.columns.iter().map(|cell| {
                    if cell.is_picture && !cell.text.is_empty() {
                        ViewCell::styled(PICTURE, RowStyleClass::Dimmed)
                    } else {
                        ViewCell::plain(cell.text.clone())
                    }
                }))
                .collect();
            ViewRow {
                id: row.id,
                cells,
                style: RowStyleClass::Normal,
            }
        })
        .collect();

    let widths: Vec<u16> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|r| r.cells.get(i))
                .map(|c| text_width(&c.text))
                .fold(text_width(&header.label), u16::max)
                .clamp(MIN_WIDTH, MAX_WIDTH)
        })
        .collect();

    let (footer, empty_message) = if rows.is_empty() {
        let message = if state.num_participants > 0 {
            anonymous_message(hidden)
        } else {
            NO_PARTICIPANTS.to_string()
        };
        (None, Some(message))
    } else {
        ((hidden > 0).then(|| anonymous_message(hidden)), None)
    };

    TableViewModel {
        title,
        counter: counter_label(state.num_participants, hidden),
        headers,
        widths,
        rows,
        footer,
        empty_message,
    }
}
