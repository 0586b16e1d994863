//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::model::CHECKED_IN_FIELD;
use crate::sort::ColumnSelector;

use super::state::{AppState, Status};
use super::table::ParticipantTableState;

/// Result of handling an input event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    if state.show_help {
        return handle_help(state, key);
    }
    handle_normal_mode(state, key)
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            state.show_help = false;
            state.help_scroll = 0;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            // Clamped during render
            state.help_scroll = state.help_scroll.saturating_add(1);
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let page = state.page_size.max(1);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Char('?') => state.show_help = true,

        // Accordion
        KeyCode::Tab => state.focus_next(),
        KeyCode::BackTab => state.focus_prev(),
        KeyCode::Char(' ') => {
            if let Some(table) = state.focused_table_mut() {
                table.toggle_expanded();
            }
        }

        // Header cursor and sorting
        KeyCode::Left | KeyCode::Char('h') => {
            if let Some(table) = state.focused_table_mut() {
                table.cursor_left();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let Some(table) = state.focused_table_mut() {
                table.cursor_right();
            }
        }
        KeyCode::Enter | KeyCode::Char('s') => state.sort_focused_at_cursor(),
        KeyCode::Char('c') => {
            if state.focused_table().is_some_and(|t| t.show_checkin) {
                state.sort_focused(ColumnSelector::field(CHECKED_IN_FIELD));
            } else {
                state.status = Some(Status::Info("Check-in column is not shown".to_string()));
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if state.focused_table().is_some_and(|t| index < t.headers.len()) {
                state.sort_focused(ColumnSelector::Column(index));
            }
        }
        KeyCode::Char('r') => state.reset_focused(),

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => navigate(state, |t| t.select_up()),
        KeyCode::Down | KeyCode::Char('j') => navigate(state, |t| t.select_down()),
        KeyCode::PageUp => navigate(state, |t| t.page_up(page)),
        KeyCode::PageDown => navigate(state, |t| t.page_down(page)),
        KeyCode::Home | KeyCode::Char('g') => navigate(state, |t| t.home()),
        KeyCode::End | KeyCode::Char('G') => navigate(state, |t| t.end()),
        _ => {}
    }
    KeyAction::None
}

fn navigate(state: &mut AppState, step: impl FnOnce(&mut ParticipantTableState)) {
    if let Some(table) = state.focused_table_mut() {
        step(table);
        table.resolve_selection();
    }
}

/// Handles mouse input: a left click on a column header sorts by it.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> KeyAction {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
        && !state.show_help
    {
        state.click(mouse.column, mouse.row);
    }
    KeyAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, ParticipantTable, Row};
    use crate::sort::{Collator, SortState};
    use crate::tui::state::HeaderHitbox;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state(show_checkin: bool) -> AppState {
        let table = ParticipantTable {
            headers: vec!["Name".to_string(), "City".to_string()],
            rows: vec![
                Row::new(1, false, vec![Cell::text("b"), Cell::text("x")]),
                Row::new(2, true, vec![Cell::text("a"), Cell::text("y")]),
                Row::new(3, false, vec![Cell::text("c"), Cell::text("w")]),
            ],
            num_participants: 3,
            show_checkin,
            title: None,
        };
        AppState::new(vec![table], "test", Collator::default())
    }

    fn ids(state: &AppState) -> Vec<u64> {
        state.tables[0].rows().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state(false);
        assert_eq!(handle_key(&mut s, key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handle_key(&mut s, key(KeyCode::Esc)), KeyAction::Quit);
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(&mut s, ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_digit_sorts_column() {
        let mut s = state(false);
        handle_key(&mut s, key(KeyCode::Char('2')));
        assert_eq!(ids(&s), vec![3, 1, 2]);
        // Beyond the header count: ignored.
        handle_key(&mut s, key(KeyCode::Char('9')));
        assert_eq!(s.tables[0].sorter.column(), Some(&ColumnSelector::Column(1)));
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut s = state(true);
        handle_key(&mut s, key(KeyCode::Right));
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(ids(&s), vec![2, 1, 3]);
        handle_key(&mut s, key(KeyCode::Char('s')));
        assert_eq!(s.tables[0].sorter.state(), SortState::Descending);
        assert_eq!(ids(&s), vec![3, 1, 2]);
    }

    #[test]
    fn test_checkin_key() {
        let mut s = state(true);
        handle_key(&mut s, key(KeyCode::Char('c')));
        assert_eq!(ids(&s), vec![2, 1, 3]);

        let mut hidden = state(false);
        handle_key(&mut hidden, key(KeyCode::Char('c')));
        assert_eq!(ids(&hidden), vec![1, 2, 3]);
        assert_eq!(
            hidden.status,
            Some(Status::Info("Check-in column is not shown".to_string()))
        );
    }

    #[test]
    fn test_reset_key() {
        let mut s = state(false);
        handle_key(&mut s, key(KeyCode::Char('1')));
        handle_key(&mut s, key(KeyCode::Char('r')));
        assert_eq!(ids(&s), vec![1, 2, 3]);
        assert_eq!(s.tables[0].sorter.state(), SortState::Unsorted);
    }

    #[test]
    fn test_row_navigation() {
        let mut s = state(false);
        handle_key(&mut s, key(KeyCode::End));
        assert_eq!(s.tables[0].selected, 2);
        handle_key(&mut s, key(KeyCode::Up));
        assert_eq!(s.tables[0].selected, 1);
        handle_key(&mut s, key(KeyCode::Home));
        assert_eq!(s.tables[0].selected, 0);
    }

    #[test]
    fn test_help_captures_keys() {
        let mut s = state(false);
        handle_key(&mut s, key(KeyCode::Char('?')));
        assert!(s.show_help);
        assert_eq!(handle_key(&mut s, key(KeyCode::Char('q'))), KeyAction::None);
        assert!(!s.show_help);
    }

    #[test]
    fn test_space_does_not_collapse_single_table() {
        let mut s = state(false);
        handle_key(&mut s, key(KeyCode::Char(' ')));
        assert!(s.tables[0].expanded);
    }

    #[test]
    fn test_mouse_click_sorts() {
        let mut s = state(false);
        s.header_hitboxes = vec![HeaderHitbox {
            table: 0,
            y: 3,
            x: 2,
            width: 4,
            selector: ColumnSelector::Column(0),
        }];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut s, click);
        assert_eq!(ids(&s), vec![2, 1, 3]);

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click
        };
        handle_mouse(&mut s, right);
        assert_eq!(s.tables[0].sorter.state(), SortState::Ascending);
    }
}
