//! Draft validation - flattens schema output into per-field display messages

use std::collections::BTreeMap;

use validator::Validate;

use crate::entities::UserProfileDraft;
use crate::value_objects::ProfileField;

/// Validation outcome for a draft: at most one display message per field.
///
/// An empty map means the draft passes the whole schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ProfileField, String>);

impl FieldErrors {
    /// Message for a field, if it currently fails its rule.
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether a field currently fails its rule.
    pub fn contains(&self, field: ProfileField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields with their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Evaluate the schema against a draft.
///
/// A field failing both its required rule and a format rule (an empty email
/// or contact) reports "required"; format messages apply only to non-empty
/// input.
pub fn validate_draft(draft: &UserProfileDraft) -> FieldErrors {
    let mut out = BTreeMap::new();
    if let Err(errors) = draft.validate() {
        let by_field = errors.field_errors();
        for &field in ProfileField::all() {
            let Some(field_errors) = by_field.get(field.schema_key()) else {
                continue;
            };
            let message = field_errors
                .iter()
                .find(|e| e.code == "length")
                .or_else(|| field_errors.first())
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string());
            if let Some(message) = message {
                out.insert(field, message);
            }
        }
    }
    FieldErrors(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> UserProfileDraft {
        let mut draft = UserProfileDraft::new();
        draft.set_value(ProfileField::FirstName, "Ada");
        draft.set_value(ProfileField::LastName, "Lovelace");
        draft.set_value(ProfileField::Email, "user@example.com");
        draft.set_value(ProfileField::Contact, "123-456-7890");
        draft.set_value(ProfileField::Address1, "12 Analytical Way");
        draft.set_value(ProfileField::Address2, "Flat 3");
        draft
    }

    #[test]
    fn valid_draft_has_no_errors() {
        let errors = validate_draft(&valid_draft());
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_draft_requires_every_field() {
        let errors = validate_draft(&UserProfileDraft::new());
        assert_eq!(errors.len(), 6);
        for &field in ProfileField::all() {
            assert_eq!(errors.get(field), Some("required"), "{}", field);
        }
    }

    #[test]
    fn malformed_email_reports_invalid_email() {
        let mut draft = valid_draft();
        draft.set_value(ProfileField::Email, "not-an-email");

        let errors = validate_draft(&draft);
        assert_eq!(errors.get(ProfileField::Email), Some("invalid email"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn empty_email_reports_required_not_format() {
        let mut draft = valid_draft();
        draft.set_value(ProfileField::Email, "");

        let errors = validate_draft(&draft);
        assert_eq!(errors.get(ProfileField::Email), Some("required"));
    }

    #[test]
    fn malformed_contact_reports_phone_message() {
        let mut draft = valid_draft();
        draft.set_value(ProfileField::Contact, "12");

        let errors = validate_draft(&draft);
        assert_eq!(
            errors.get(ProfileField::Contact),
            Some("Phone number is not valid")
        );
    }

    #[test]
    fn empty_contact_reports_required_not_format() {
        let mut draft = valid_draft();
        draft.set_value(ProfileField::Contact, "");

        let errors = validate_draft(&draft);
        assert_eq!(errors.get(ProfileField::Contact), Some("required"));
    }

    #[test]
    fn formatted_contact_numbers_pass() {
        for number in ["123-456-7890", "(123) 456-7890", "+1 123 456 7890"] {
            let mut draft = valid_draft();
            draft.set_value(ProfileField::Contact, number);
            assert!(
                validate_draft(&draft).is_empty(),
                "{} should be accepted",
                number
            );
        }
    }

    #[test]
    fn iter_yields_fields_in_form_order() {
        let mut draft = UserProfileDraft::new();
        draft.set_value(ProfileField::Email, "user@example.com");

        let errors = validate_draft(&draft);
        let fields: Vec<ProfileField> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                ProfileField::FirstName,
                ProfileField::LastName,
                ProfileField::Contact,
                ProfileField::Address1,
                ProfileField::Address2,
            ]
        );
    }
}
