//! Configuration error types

use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist
    #[error("Config file not found: {0}")]
    NotFound(String),

    /// The config file could not be read
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON
    #[error("Invalid JSON in config: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Valid JSON whose top level is not an object
    #[error("Config root must be a JSON object, found {0}")]
    NotAnObject(String),
}

impl ConfigError {
    /// Create a NotFound error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }
}
