//! Participant tables rendered as an accordion.
//! Thin TUI wrapper over [`crate::view::build_participant_view`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, HighlightSpacing, Paragraph, Row, Table};

use crate::tui::state::{AppState, HeaderHitbox};
use crate::tui::style::Styles;
use crate::view::build_participant_view;
use crate::view::common::TableViewModel;

const COLUMN_SPACING: u16 = 1;

/// Column constraints shared by the table widget and header hit-testing.
/// The last column takes the remaining width.
pub fn column_constraints(widths: &[u16]) -> Vec<Constraint> {
    let last = widths.len().saturating_sub(1);
    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            if i == last {
                Constraint::Min(w)
            } else {
                Constraint::Length(w)
            }
        })
        .collect()
}

/// Screen positions of each column header of a table drawn in `area`.
/// Empty when `area` has no room for the header row.
pub fn header_hitboxes(table: usize, area: Rect, vm: &TableViewModel<u64>) -> Vec<HeaderHitbox> {
    if area.height == 0 || area.width == 0 {
        return Vec::new();
    }
    let header_row = Rect::new(area.x, area.y, area.width, 1);
    let columns = Layout::horizontal(column_constraints(&vm.widths))
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(header_row);
    vm.headers
        .iter()
        .zip(columns.iter())
        .map(|(header, rect)| HeaderHitbox {
            table,
            y: rect.y,
            x: rect.x,
            width: rect.width,
            selector: header.selector.clone(),
        })
        .collect()
}

enum Section {
    Title(usize),
    Body(usize),
}

/// Renders every participant table: a title bar each, plus the body of
/// expanded tables sharing the remaining height.
pub fn render_accordion(frame: &mut Frame, area: Rect, state: &mut AppState) {
    state.header_hitboxes.clear();

    if state.tables.is_empty() {
        let block = Block::default().borders(Borders::ALL).style(Styles::default());
        frame.render_widget(Paragraph::new("No participant tables").block(block), area);
        return;
    }

    let mut sections = Vec::new();
    let mut constraints = Vec::new();
    for (i, table) in state.tables.iter().enumerate() {
        sections.push(Section::Title(i));
        constraints.push(Constraint::Length(1));
        if table.expanded {
            sections.push(Section::Body(i));
            constraints.push(Constraint::Fill(1));
        }
    }
    let chunks = Layout::vertical(constraints).split(area);

    for (section, chunk) in sections.iter().zip(chunks.iter()) {
        match *section {
            Section::Title(i) => render_title(frame, *chunk, state, i),
            Section::Body(i) => render_body(frame, *chunk, state, i),
        }
    }
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState, index: usize) {
    let table = &state.tables[index];
    let vm = build_participant_view(table);
    let marker = match (table.collapsible, table.expanded) {
        (false, _) => "",
        (true, true) => "▾ ",
        (true, false) => "▸ ",
    };
    let style = if index == state.focused {
        Styles::title_active()
    } else {
        Styles::title_inactive()
    };

    let counter_width = u16::try_from(vm.counter.chars().count() + 1).unwrap_or(u16::MAX);
    let chunks = Layout::horizontal([Constraint::Min(1), Constraint::Length(counter_width)])
        .split(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!("{}{}", marker, vm.title), style))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(vm.counter, Styles::dim()))),
        chunks[1],
    );
}

fn render_body(frame: &mut Frame, area: Rect, state: &mut AppState, index: usize) {
    let focused = index == state.focused;
    let vm = build_participant_view(&state.tables[index]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_active()
        } else {
            Styles::dim()
        })
        .style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(message) = &vm.empty_message {
        frame.render_widget(Paragraph::new(message.as_str()).style(Styles::dim()), inner);
        return;
    }

    let (table_area, footer_area) = if vm.footer.is_some() {
        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        (chunks[0], Some(chunks[1]))
    } else {
        (inner, None)
    };

    if focused {
        state.page_size = table_area.height.saturating_sub(1).max(1) as usize;
    }
    state
        .header_hitboxes
        .extend(header_hitboxes(index, table_area, &vm));

    let headers: Vec<Span> = vm
        .headers
        .iter()
        .map(|h| {
            let style = if focused && h.focused {
                Styles::table_header_focused()
            } else {
                Styles::table_header()
            };
            Span::styled(h.label.clone(), style)
        })
        .collect();
    let header = Row::new(headers).style(Styles::table_header()).height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|vr| {
            let cells = vr.cells.iter().map(|c| match c.style {
                Some(s) => Span::styled(c.text.clone(), Styles::from_class(s)),
                None => Span::raw(c.text.clone()),
            });
            Row::new(cells).style(Styles::from_class(vr.style)).height(1)
        })
        .collect();

    let table = Table::new(rows, column_constraints(&vm.widths))
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .highlight_spacing(HighlightSpacing::Never)
        .row_highlight_style(if focused {
            Styles::selected()
        } else {
            Style::default()
        });
    frame.render_stateful_widget(table, table_area, &mut state.tables[index].ratatui_state);

    if let (Some(footer), Some(footer_area)) = (&vm.footer, footer_area) {
        frame.render_widget(Paragraph::new(footer.as_str()).style(Styles::dim()), footer_area);
    }
}
