//! User profile draft entity
//!
//! The draft is ephemeral UI state: created empty when the form mounts,
//! mutated field-by-field as the user types, and handed to the completion
//! action on a valid submit. It is never persisted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::value_objects::ProfileField;

/// Contact-number pattern: optional country code, optional parenthesised area
/// code, space/dash separators between short digit groups, ending in a
/// 3-4 + 3-4 digit pair. Deliberately broad; some short-ish sequences that
/// still satisfy the trailing groups are accepted.
pub(crate) static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((\+[1-9]{1,4}[ -]?)|(\([0-9]{2,3}\)[ -]?)|([0-9]{2,4})[ -]?)*?[0-9]{3,4}[ -]?[0-9]{3,4}$",
    )
    .expect("phone pattern compiles")
});

/// The in-progress, unsaved profile a user is composing.
///
/// All six fields start empty. The validation rules live on the struct as a
/// declarative schema; [`crate::value_objects::validate_draft`] flattens the
/// outcome into one display message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfileDraft {
    #[validate(length(min = 1, message = "required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "required"), email(message = "invalid email"))]
    pub email: String,

    #[validate(
        length(min = 1, message = "required"),
        regex(path = *PHONE_PATTERN, message = "Phone number is not valid")
    )]
    pub contact: String,

    #[validate(length(min = 1, message = "required"))]
    pub address1: String,

    #[validate(length(min = 1, message = "required"))]
    pub address2: String,
}

impl UserProfileDraft {
    /// Fresh draft with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Contact => &self.contact,
            ProfileField::Address1 => &self.address1,
            ProfileField::Address2 => &self.address2,
        }
    }

    /// Replace a field's value (keystroke path).
    pub fn set_value(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Contact => self.contact = value,
            ProfileField::Address1 => self.address1 = value,
            ProfileField::Address2 => self.address2 = value,
        }
    }
}
