//! Application layer - Dioxus-free form machinery

mod form_state;

pub use form_state::ProfileFormState;
