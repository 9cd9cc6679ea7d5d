//! Log-level counting
//!
//! Scans log files line by line and counts lines per severity level.
//! Each line is attributed to at most one level, checked in the fixed
//! priority order ERROR, WARN, INFO, DEBUG, FATAL.

mod error;
mod level;
mod parser;

pub use error::LogParseError;
pub use level::LogLevel;
pub use parser::{count_levels, parse_log_file, parse_log_file_or_default, LevelCounts};

#[cfg(test)]
mod tests;
