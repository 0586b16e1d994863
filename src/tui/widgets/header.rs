//! Top bar and bottom status line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, Status};
use crate::tui::style::Styles;

/// Renders the top bar: application, source file and table position.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(10), // Name
        Constraint::Min(10),    // Source
        Constraint::Length(14), // Position
        Constraint::Length(9),  // Help hint
    ])
    .split(area);

    frame.render_widget(Paragraph::new(" rollcall").style(Styles::header()), chunks[0]);
    frame.render_widget(
        Paragraph::new(state.source.as_str()).style(Styles::header()),
        chunks[1],
    );

    let position = if state.tables.is_empty() {
        String::new()
    } else {
        format!("table {}/{}", state.focused + 1, state.tables.len())
    };
    frame.render_widget(Paragraph::new(position).style(Styles::header()), chunks[2]);
    frame.render_widget(Paragraph::new("? help").style(Styles::header()), chunks[3]);
}

/// Renders the status line: the last sort result, or key hints.
pub fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.status {
        Some(Status::Info(msg)) => Line::from(Span::styled(msg.clone(), Styles::dim())),
        Some(Status::Error(msg)) => Line::from(Span::styled(msg.clone(), Styles::critical())),
        None => Line::from(vec![
            Span::styled("←→", Styles::help_key()),
            Span::styled(" column  ", Styles::dim()),
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" sort  ", Styles::dim()),
            Span::styled("Tab", Styles::help_key()),
            Span::styled(" next table  ", Styles::dim()),
            Span::styled("q", Styles::help_key()),
            Span::styled(" quit", Styles::dim()),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
