//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level recognised in log lines
///
/// Variant order is the matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Fatal,
}

impl LogLevel {
    /// All levels in matching priority order
    pub const PRIORITY: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Fatal,
    ];

    /// Marker text searched for in a line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Fatal => "FATAL",
        }
    }

    /// First level whose marker appears in `line`
    ///
    /// A line mentioning both FATAL and ERROR is classified as ERROR.
    pub fn classify(line: &str) -> Option<LogLevel> {
        Self::PRIORITY
            .into_iter()
            .find(|level| line.contains(level.as_str()))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
