//! Mean, median and standard deviation

use serde::{Deserialize, Serialize};

/// Summary statistics of a sample sequence
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Statistics {
    /// Arithmetic mean
    pub mean: f64,

    /// Middle value of the sorted samples
    pub median: f64,

    /// Population standard deviation (divides by N)
    pub std_dev: f64,
}

impl Statistics {
    /// One-line human readable summary, two decimals per value
    pub fn summary(&self) -> String {
        format!(
            "Mean: {:.2}, Median: {:.2}, Std Dev: {:.2}",
            self.mean, self.median, self.std_dev
        )
    }
}

impl From<Statistics> for (f64, f64, f64) {
    fn from(stats: Statistics) -> Self {
        (stats.mean, stats.median, stats.std_dev)
    }
}

/// Calculates mean, median and population standard deviation
///
/// The input is not modified; the median is taken from a sorted copy.
/// NaN and infinite samples are not filtered and propagate through the
/// arithmetic.
///
/// # Arguments
/// * `numbers` - Samples to summarize
///
/// # Returns
/// Computed Statistics, or all zeros when `numbers` is empty
pub fn calculate_statistics(numbers: &[f64]) -> Statistics {
    if numbers.is_empty() {
        return Statistics::default();
    }

    let count = numbers.len() as f64;
    let mean = numbers.iter().sum::<f64>() / count;

    let variance = numbers.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count;

    Statistics {
        mean,
        median: median(numbers),
        std_dev: variance.sqrt(),
    }
}

/// Median of a non-empty slice
fn median(numbers: &[f64]) -> f64 {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}
