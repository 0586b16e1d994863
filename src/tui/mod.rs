//! Terminal user interface for browsing participant lists.
//!
//! Each participant table is an accordion item. Column headers are sorted
//! from the keyboard or by clicking them with the mouse.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod table;
mod widgets;

pub use app::App;
pub use state::{AppState, HeaderHitbox, Status};
pub use table::ParticipantTableState;
