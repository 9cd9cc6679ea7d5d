//! Tests for log-level counting

use std::fs;
use std::io::Cursor;

use tempfile::tempdir;

use super::*;

fn counts_of(text: &str) -> LevelCounts {
    count_levels(Cursor::new(text.as_bytes())).unwrap()
}

// ===== LogLevel =====

#[test]
fn test_classify_priority_order() {
    assert_eq!(LogLevel::classify("ERROR and INFO"), Some(LogLevel::Error));
    assert_eq!(LogLevel::classify("FATAL ERROR"), Some(LogLevel::Error));
    assert_eq!(LogLevel::classify("DEBUG then WARN"), Some(LogLevel::Warn));
    assert_eq!(LogLevel::classify("INFO DEBUG"), Some(LogLevel::Info));
    assert_eq!(LogLevel::classify("FATAL: disk gone"), Some(LogLevel::Fatal));
    assert_eq!(LogLevel::classify("nothing here"), None);
}

#[test]
fn test_classify_is_substring_and_case_sensitive() {
    assert_eq!(LogLevel::classify("WARNING: low memory"), Some(LogLevel::Warn));
    assert_eq!(LogLevel::classify("[INFORMATION]"), Some(LogLevel::Info));
    assert_eq!(LogLevel::classify("error: lower case"), None);
}

#[test]
fn test_level_serialization() {
    assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), r#""WARN""#);
    assert_eq!(LogLevel::Fatal.to_string(), "FATAL");
}

// ===== count_levels =====

#[test]
fn test_count_levels_one_per_line() {
    let counts = counts_of(
        "2024-01-15 10:00:00 INFO started\n\
         2024-01-15 10:00:01 ERROR failed, see INFO above\n\
         2024-01-15 10:00:02 WARN slow\n\
         2024-01-15 10:00:03 INFO done\n\
         plain line\n",
    );

    assert_eq!(counts.get(LogLevel::Info), 2);
    assert_eq!(counts.get(LogLevel::Error), 1);
    assert_eq!(counts.get(LogLevel::Warn), 1);
    assert_eq!(counts.get(LogLevel::Debug), 0);
    assert_eq!(counts.total(), 4);
}

#[test]
fn test_count_levels_only_stores_seen_levels() {
    let counts = counts_of("DEBUG a\nDEBUG b");
    assert_eq!(counts.iter().collect::<Vec<_>>(), vec![(LogLevel::Debug, 2)]);
    assert_eq!(serde_json::to_string(&counts).unwrap(), r#"{"DEBUG":2}"#);
}

#[test]
fn test_count_levels_empty_input() {
    let counts = counts_of("");
    assert!(counts.is_empty());
    assert_eq!(counts.total(), 0);
}

#[test]
fn test_count_levels_lone_carriage_return_splits_lines() {
    let counts = counts_of("ERROR a\rINFO b\n");
    assert_eq!(counts.get(LogLevel::Error), 1);
    assert_eq!(counts.get(LogLevel::Info), 1);
}

#[test]
fn test_count_levels_crlf_is_one_line() {
    let counts = counts_of("ERROR a and INFO\r\nWARN b\r\n");
    assert_eq!(counts.get(LogLevel::Error), 1);
    assert_eq!(counts.get(LogLevel::Info), 0);
    assert_eq!(counts.get(LogLevel::Warn), 1);
    assert_eq!(counts.total(), 2);
}

#[test]
fn test_count_levels_invalid_utf8() {
    let bytes: &[u8] = b"ERROR \xff\xfe bad bytes\nINFO ok\n";
    let counts = count_levels(Cursor::new(bytes)).unwrap();
    assert_eq!(counts.get(LogLevel::Error), 1);
    assert_eq!(counts.get(LogLevel::Info), 1);
}

// ===== parse_log_file =====

#[test]
fn test_parse_log_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");
    fs::write(&path, "FATAL boom\nERROR oops\nERROR again\n").unwrap();

    let counts = parse_log_file(&path).unwrap();
    assert_eq!(counts.get(LogLevel::Error), 2);
    assert_eq!(counts.get(LogLevel::Fatal), 1);
}

#[test]
fn test_parse_missing_log_file() {
    let dir = tempdir().unwrap();
    let err = parse_log_file(dir.path().join("absent.log")).unwrap_err();
    assert!(matches!(err, LogParseError::NotFound(_)));
    assert!(err.to_string().starts_with("Log file not found: "));
}

#[test]
fn test_parse_or_default_missing_file_is_empty() {
    let dir = tempdir().unwrap();
    assert!(parse_log_file_or_default(dir.path().join("absent.log")).is_empty());
}

#[test]
fn test_counts_round_trip_through_json() {
    let counts = counts_of("WARN\nINFO\nINFO\n");
    let json = serde_json::to_string(&counts).unwrap();
    let back: LevelCounts = serde_json::from_str(&json).unwrap();
    assert_eq!(back, counts);
}
