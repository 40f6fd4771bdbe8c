//! Common reusable UI components.
//!
//! Shared form controls and layout primitives used across views.

mod form_field;
pub use form_field::FormField;

mod header;
pub use header::Header;
