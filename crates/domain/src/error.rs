//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing callers to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Required fields are empty or missing
    /// - Values do not match their declared format
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("email cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: email cannot be empty");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown profile field: middleName");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("middleName"));
    }
}
