//! Descriptive statistics over numeric samples
//!
//! Reduces a sample sequence to mean, median and population standard
//! deviation. Empty input yields all zeros rather than an error.

/// Calculator module for descriptive statistics
pub mod calculator;

pub use calculator::{calculate_statistics, Statistics};
