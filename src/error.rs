//! Unified application error types
//!
//! Wraps the per-module errors in a single type with a serializable
//! `{ code, message }` form.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::directory::DirectoryError;
use crate::logs::LogParseError;
use crate::validation::ValidationError;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Config loading error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Log scanning error
    #[error("Log parse error: {0}")]
    LogParse(#[from] LogParseError),

    /// User data validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// User directory error
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Serializable error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::LogParse(_) => "LOG_PARSE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Directory(_) => "DIRECTORY_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Config(e) => e.to_string(),
            Self::LogParse(e) => e.to_string(),
            Self::Validation(e) => e.to_string(),
            Self::Directory(e) => e.to_string(),
            Self::Internal(msg) => msg.clone(),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}
