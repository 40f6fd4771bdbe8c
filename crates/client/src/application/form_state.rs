//! Profile form state: draft values plus per-field interaction tracking.
//!
//! Pure state machine behind the profile form view, testable without a
//! Dioxus runtime. Validation is evaluated against the current draft on
//! every read, so errors always reflect the latest keystroke.

use std::collections::BTreeSet;

use rosterdesk_domain::{validate_draft, DomainError, FieldErrors, ProfileField, UserProfileDraft};

/// Form-wide state: the draft being composed and which fields the user has
/// interacted with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFormState {
    draft: UserProfileDraft,
    touched: BTreeSet<ProfileField>,
}

impl ProfileFormState {
    /// Fresh form: every field empty, nothing touched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn value(&self, field: ProfileField) -> String {
        self.draft.value(field).to_string()
    }

    /// Keystroke path: replace a field's value.
    pub fn set_value(&mut self, field: ProfileField, value: impl Into<String>) {
        self.draft.set_value(field, value);
    }

    /// Blur path: mark a field as interacted with. Touched flags are
    /// monotonic for the lifetime of the form.
    pub fn blur(&mut self, field: ProfileField) {
        self.touched.insert(field);
    }

    /// Whether the user has interacted with (and left) a field at least once.
    pub fn is_touched(&self, field: ProfileField) -> bool {
        self.touched.contains(&field)
    }

    /// Validation result for the whole draft as currently typed.
    pub fn errors(&self) -> FieldErrors {
        validate_draft(&self.draft)
    }

    /// The error to display under a field: present only once the field has
    /// been touched and its current value fails its rule.
    pub fn visible_error(&self, field: ProfileField) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().get(field).map(str::to_string)
    }

    /// Submit path: re-validate the whole draft.
    ///
    /// On success the draft is returned for the completion action; the form
    /// keeps its values. On failure every field is marked touched so all
    /// outstanding errors render at once, and submission is blocked.
    pub fn submit(&mut self) -> Result<UserProfileDraft, DomainError> {
        let errors = self.errors();
        if errors.is_empty() {
            return Ok(self.draft.clone());
        }
        for &field in ProfileField::all() {
            self.touched.insert(field);
        }
        Err(DomainError::validation(format!(
            "{} field(s) failed validation",
            errors.len()
        )))
    }
}
