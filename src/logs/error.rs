//! Error types for log parsing

use thiserror::Error;

/// Errors that can occur while scanning a log file
#[derive(Debug, Error)]
pub enum LogParseError {
    /// The log file does not exist
    #[error("Log file not found: {0}")]
    NotFound(String),

    /// Reading the log failed part way
    #[error("Failed to read log: {0}")]
    Io(#[from] std::io::Error),
}

impl LogParseError {
    /// Create a NotFound error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }
}
