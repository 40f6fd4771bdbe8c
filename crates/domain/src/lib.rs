//! Rosterdesk domain layer.
//!
//! Pure domain types for the user-profile creation flow: the draft entity,
//! the declarative validation schema, and the unified error type. No UI
//! dependencies live here.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::UserProfileDraft;
pub use error::DomainError;
pub use value_objects::{validate_draft, FieldErrors, ProfileField};
