//! Validation error types

use thiserror::Error;

/// Errors raised while validating user data for creation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// The email field is present but malformed
    #[error("Invalid email format")]
    InvalidEmail,
}

impl ValidationError {
    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Name of the missing field, if this is a MissingField error
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(field) => Some(field),
            Self::InvalidEmail => None,
        }
    }
}
