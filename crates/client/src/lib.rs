//! Rosterdesk client crate.
//!
//! Contains the form-state machinery (application layer) and the Dioxus
//! presentation layer. The binary in `main.rs` is the composition root.

pub mod application;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::{app, LayoutMode};
