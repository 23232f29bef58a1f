//! Error types for JOTTER core operations.

use thiserror::Error;

/// Field-level validation errors for note drafts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: &'static str },

    #[error("{field} is too short: {len} chars (minimum {min})")]
    TooShort {
        field: &'static str,
        len: usize,
        min: usize,
    },

    #[error("{field} is too long: {len} chars (maximum {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

impl ValidationError {
    /// The draft field the violation refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::RequiredFieldMissing { field } => field,
            ValidationError::TooShort { field, .. } => field,
            ValidationError::TooLong { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_too_long() {
        let err = ValidationError::TooLong {
            field: "content",
            len: 512,
            max: 500,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("content"));
        assert!(msg.contains("512"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn test_validation_error_display_required() {
        let err = ValidationError::RequiredFieldMissing { field: "title" };
        assert!(format!("{}", err).contains("title"));
        assert_eq!(err.field(), "title");
    }
}
