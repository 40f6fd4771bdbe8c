//! Field identifiers for the user-profile form

use std::fmt;

use crate::error::DomainError;

/// Identifies one of the six profile form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Contact,
    Address1,
    Address2,
}

impl ProfileField {
    /// All fields in form order.
    pub fn all() -> &'static [ProfileField] {
        &[
            ProfileField::FirstName,
            ProfileField::LastName,
            ProfileField::Email,
            ProfileField::Contact,
            ProfileField::Address1,
            ProfileField::Address2,
        ]
    }

    /// Wire name, matching the draft's serialized field names.
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "firstName",
            ProfileField::LastName => "lastName",
            ProfileField::Email => "email",
            ProfileField::Contact => "contact",
            ProfileField::Address1 => "address1",
            ProfileField::Address2 => "address2",
        }
    }

    /// Key the validation schema reports errors under (struct field name).
    pub(crate) fn schema_key(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "first_name",
            ProfileField::LastName => "last_name",
            ProfileField::Email => "email",
            ProfileField::Contact => "contact",
            ProfileField::Address1 => "address1",
            ProfileField::Address2 => "address2",
        }
    }

    /// Human-readable label shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
            ProfileField::Email => "Email",
            ProfileField::Contact => "Contact Number",
            ProfileField::Address1 => "Address 1",
            ProfileField::Address2 => "Address 2",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ProfileField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "firstname" => Ok(ProfileField::FirstName),
            "lastname" => Ok(ProfileField::LastName),
            "email" => Ok(ProfileField::Email),
            "contact" => Ok(ProfileField::Contact),
            "address1" => Ok(ProfileField::Address1),
            "address2" => Ok(ProfileField::Address2),
            _ => Err(DomainError::parse(format!("Unknown profile field: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn all_lists_six_fields_in_form_order() {
        let all = ProfileField::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], ProfileField::FirstName);
        assert_eq!(all[1], ProfileField::LastName);
        assert_eq!(all[5], ProfileField::Address2);
    }

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for &field in ProfileField::all() {
            let parsed = ProfileField::from_str(field.name()).expect("wire name parses");
            assert_eq!(parsed, field);
        }
    }

    #[test]
    fn unknown_field_name_is_a_parse_error() {
        let err = ProfileField::from_str("middleName").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn labels_match_rendered_form() {
        assert_eq!(ProfileField::FirstName.label(), "First Name");
        assert_eq!(ProfileField::Contact.label(), "Contact Number");
        assert_eq!(ProfileField::Address2.label(), "Address 2");
    }
}
