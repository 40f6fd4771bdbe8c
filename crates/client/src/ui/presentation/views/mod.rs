//! Top-level views

mod profile_form;

pub use profile_form::ProfileFormView;
