//! Help popup listing keybindings.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

const KEYS: &[(&str, &str)] = &[
    ("←/→, h/l", "move the column cursor"),
    ("Enter, s", "sort by the column under the cursor"),
    ("1-9", "sort by column N"),
    ("c", "sort by check-in status"),
    ("r", "restore the original order"),
    ("click", "sort by the clicked column header"),
    ("↑/↓, j/k", "select participant"),
    ("PgUp/PgDn", "page through participants"),
    ("Home/End, g/G", "first / last participant"),
    ("Tab/BackTab", "next / previous table"),
    ("Space", "expand or collapse the table"),
    ("?", "toggle this help"),
    ("q, Esc", "quit"),
];

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Sorting cycles: ascending ▲ → descending ▼ → original order",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            "Each sort starts from the order currently shown.",
            Styles::dim(),
        )),
        Line::from(""),
    ];
    lines.extend(KEYS.iter().map(|(key, what)| {
        Line::from(vec![
            Span::styled(format!("  {:<16}", key), Styles::help_key()),
            Span::raw(*what),
        ])
    }));
    lines
}

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 72).min(area.width);
    let popup_height = (area.height * 80 / 100).clamp(10, 24).min(area.height);
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Participant list help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let content = help_lines();
    let max_scroll = content.len().saturating_sub(chunks[0].height as usize);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Styles::dim()),
        Span::styled("?", Styles::help_key()),
        Span::styled(" to close, ", Styles::dim()),
        Span::styled("↑↓", Styles::help_key()),
        Span::styled(" to scroll", Styles::dim()),
    ]));
    frame.render_widget(footer, chunks[1]);
}
