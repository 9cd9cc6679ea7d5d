//! Line-oriented log scanning

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::error::LogParseError;
use super::level::LogLevel;

/// Per-level line counts
///
/// Only levels that occurred are stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelCounts {
    counts: BTreeMap<LogLevel, usize>,
}

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one line at `level`
    pub fn record(&mut self, level: LogLevel) {
        *self.counts.entry(level).or_insert(0) += 1;
    }

    /// Count for `level`, zero if it never occurred
    pub fn get(&self, level: LogLevel) -> usize {
        self.counts.get(&level).copied().unwrap_or(0)
    }

    /// Number of classified lines
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Levels that occurred, in priority order
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, usize)> + '_ {
        self.counts.iter().map(|(level, count)| (*level, *count))
    }
}

/// Counts log levels over every line of `reader`
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Invalid UTF-8 is decoded lossily so a stray byte does not end the scan.
pub fn count_levels<R: BufRead>(mut reader: R) -> Result<LevelCounts, LogParseError> {
    let mut counts = LevelCounts::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // A lone `\r` also ends a line
        for segment in buf.split(|b| *b == b'\r') {
            let line = String::from_utf8_lossy(segment);
            if let Some(level) = LogLevel::classify(&line) {
                counts.record(level);
            }
        }
    }

    Ok(counts)
}

/// Parses a log file and counts lines by level
///
/// # Arguments
/// * `path` - Path of the log file
///
/// # Returns
/// Level counts, or NotFound when the file does not exist
pub fn parse_log_file(path: impl AsRef<Path>) -> Result<LevelCounts, LogParseError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LogParseError::not_found(path.display().to_string()),
        _ => LogParseError::Io(e),
    })?;

    let counts = count_levels(BufReader::new(file))?;
    debug!(path = %path.display(), lines = counts.total(), "Parsed log file");
    Ok(counts)
}

/// Parses a log file, falling back to empty counts
///
/// Failures are logged at error level and never returned.
pub fn parse_log_file_or_default(path: impl AsRef<Path>) -> LevelCounts {
    let path = path.as_ref();
    match parse_log_file(path) {
        Ok(counts) => counts,
        Err(e) => {
            error!(path = %path.display(), "{}", e);
            LevelCounts::new()
        }
    }
}
