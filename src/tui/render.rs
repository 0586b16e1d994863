//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::AppState;
use super::widgets::{render_accordion, render_header, render_help, render_status};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Tables
        Constraint::Length(1), // Status
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_accordion(frame, chunks[1], state);
    render_status(frame, chunks[2], state);

    // Help popup (rendered last to overlay everything)
    if state.show_help {
        render_help(frame, area, &mut state.help_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, ParticipantTable, Row};
    use crate::sort::{Collator, ColumnSelector};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn state() -> AppState {
        let table = ParticipantTable {
            headers: vec!["Name".to_string()],
            rows: vec![
                Row::new(1, true, vec![Cell::text("Bea")]),
                Row::new(2, false, vec![Cell::text("Al")]),
            ],
            num_participants: 3,
            show_checkin: true,
            title: Some("Workshop".to_string()),
        };
        AppState::new(vec![table], "participants.json", Collator::default())
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|line| line.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_single_table() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut state = state();
        terminal.draw(|f| render(f, &mut state)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("rollcall"));
        assert!(text.contains("participants.json"));
        assert!(text.contains("Workshop"));
        assert!(text.contains("3 participants (1 hidden)"));
        assert!(text.contains("Bea"));
        assert!(text.contains("1 participant registered anonymously."));
        // Header row of the table sits inside the body border.
        assert!(!state.header_hitboxes.is_empty());
        assert!(state.header_hitboxes.iter().all(|h| h.y == 3));
    }

    #[test]
    fn test_click_after_render_sorts() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut state = state();
        terminal.draw(|f| render(f, &mut state)).unwrap();

        let name = state
            .header_hitboxes
            .iter()
            .find(|h| h.selector == ColumnSelector::Column(0))
            .cloned()
            .unwrap();
        assert!(state.click(name.x, name.y));
        let ids: Vec<u64> = state.tables[0].rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);

        terminal.draw(|f| render(f, &mut state)).unwrap();
        assert!(screen(&terminal).contains("Name▲"));
    }

    #[test]
    fn test_squeezed_bodies_register_no_headers() {
        let table = |title: &str| ParticipantTable {
            headers: vec!["Name".to_string()],
            rows: vec![
                Row::new(1, true, vec![Cell::text("Bea")]),
                Row::new(2, false, vec![Cell::text("Al")]),
            ],
            num_participants: 2,
            show_checkin: true,
            title: Some(title.to_string()),
        };
        let mut state = AppState::new(
            vec![table("A"), table("B")],
            "participants.json",
            Collator::default(),
        );
        // Both bodies get one line: the border and no header row.
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal.draw(|f| render(f, &mut state)).unwrap();

        assert!(state.header_hitboxes.is_empty());
        // Title of table B and the status line.
        assert!(!state.click(1, 3));
        assert!(!state.click(1, 5));
        let ids: Vec<u64> = state.tables[0].rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_render_help_popup() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut state = state();
        state.show_help = true;
        state.help_scroll = 100;
        terminal.draw(|f| render(f, &mut state)).unwrap();
        assert!(screen(&terminal).contains("Participant list help"));
        // Scroll is clamped to the content.
        assert!(state.help_scroll < 100);
    }

    #[test]
    fn test_render_without_tables() {
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        let mut state = AppState::new(Vec::new(), "empty.json", Collator::default());
        terminal.draw(|f| render(f, &mut state)).unwrap();
        assert!(screen(&terminal).contains("No participant tables"));
    }
}
