//! User directory error types

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by a [`super::UserDirectory`]
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The user data was rejected before reaching the backend
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl DirectoryError {
    /// Create a Network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an InvalidResponse error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Returns the validation failure, if that is what this error is
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
