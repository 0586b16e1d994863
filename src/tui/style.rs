//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::common::RowStyleClass;

/// Viewer color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const HEADER_BG: Color = Color::Blue;
    pub const HEADER_FG: Color = Color::White;
    pub const SELECTED_BG: Color = Color::DarkGray;

    pub const ACCENT: Color = Color::Cyan;
    pub const POSITIVE: Color = Color::Green;
    pub const CRITICAL: Color = Color::Red;
    pub const KEY: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Top bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Column header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Column header under the keyboard cursor.
    pub fn table_header_focused() -> Style {
        Self::table_header().add_modifier(Modifier::REVERSED)
    }

    /// Accordion title of the focused table.
    pub fn title_active() -> Style {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Accordion title of other tables.
    pub fn title_inactive() -> Style {
        Style::default().fg(Theme::FG)
    }

    /// Border of the focused table.
    pub fn border_active() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Error text in the status line.
    pub fn critical() -> Style {
        Style::default()
            .fg(Theme::CRITICAL)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted keys in help text.
    pub fn help_key() -> Style {
        Style::default().fg(Theme::KEY)
    }

    /// Maps a UI-agnostic [`RowStyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: RowStyleClass) -> Style {
        match class {
            RowStyleClass::Normal => Self::default(),
            RowStyleClass::Positive => Style::default().fg(Theme::POSITIVE),
            RowStyleClass::Critical => Style::default().fg(Theme::CRITICAL),
            RowStyleClass::Dimmed => Self::dim(),
        }
    }
}
