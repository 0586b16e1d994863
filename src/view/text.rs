//! Plain-text rendering of a [`TableViewModel`] for non-interactive output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::view::common::TableViewModel;

const COLUMN_GAP: &str = "  ";
const ELLIPSIS: char = '…';

fn pad(out: &mut String, used: usize, width: usize) {
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
}

/// Pads or truncates `text` to exactly `width` terminal columns.
fn fit(text: &str, width: usize) -> String {
    let len = text.width();
    let mut out = String::with_capacity(text.len() + width);
    if len <= width {
        out.push_str(text);
        pad(&mut out, len, width);
        return out;
    }
    if width == 0 {
        return out;
    }

    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    pad(&mut out, used + 1, width);
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn join_line(cells: impl Iterator<Item = String>) -> String {
    let line = cells.collect::<Vec<_>>().join(COLUMN_GAP);
    line.trim_end().to_string()
}

/// Renders the view model as an aligned text table.
pub fn render_text<Id>(vm: &TableViewModel<Id>) -> String {
    let mut out = String::new();
    push_line(&mut out, &format!("{} [{}]", vm.title, vm.counter));

    if let Some(message) = &vm.empty_message {
        push_line(&mut out, message);
        return out;
    }

    let widths: Vec<usize> = vm.widths.iter().map(|&w| w as usize).collect();

    let header = join_line(
        vm.headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| fit(&h.label, w)),
    );
    push_line(&mut out, &header);
    push_line(&mut out, &join_line(widths.iter().map(|&w| "-".repeat(w))));

    for row in &vm.rows {
        let line = join_line(
            widths
                .iter()
                .enumerate()
                .map(|(i, &w)| fit(row.cells.get(i).map(|c| c.text.as_str()).unwrap_or(""), w)),
        );
        push_line(&mut out, &line);
    }

    if let Some(footer) = &vm.footer {
        push_line(&mut out, footer);
    }
    out
}
