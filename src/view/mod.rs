//! UI-agnostic view models.
//!
//! [`participants::build_participant_view`] turns a participant table state
//! into a [`common::TableViewModel`]. The TUI maps the view model to ratatui
//! widgets, [`text::render_text`] prints it as plain text.

pub mod common;
pub mod participants;
pub mod text;

pub use participants::build_participant_view;
pub use text::render_text;
