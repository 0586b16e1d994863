//! TUI widgets for the participant list viewer.

mod header;
mod help;
pub mod participants;

pub use header::{render_header, render_status};
pub use help::render_help;
pub use participants::render_accordion;
