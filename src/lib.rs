//! rollcall - sortable participant lists.
//!
//! This library provides:
//! - [`sort`] - tri-state column sorting with locale-aware string collation
//! - [`model`] / [`loader`] - participant tables and their JSON documents
//! - [`view`] - UI-agnostic view models and plain-text output
//! - [`tui`] - interactive terminal viewer used by the `rollcall` binary

pub mod loader;
pub mod model;
pub mod sort;
pub mod tui;
pub mod view;
