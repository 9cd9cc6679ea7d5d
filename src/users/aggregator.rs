//! User-record aggregation logic

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;
use tracing::debug;

use crate::validation::is_valid_email;

use super::{UserRecord, UserStats};

/// Reduces batches of user records to [`UserStats`]
///
/// The running processed count is updated with a single atomic add, so one
/// aggregator can be shared between threads.
#[derive(Debug, Default)]
pub struct UserAggregator {
    processed_count: AtomicUsize,
}

impl UserAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records processed by this aggregator so far
    pub fn processed_count(&self) -> usize {
        self.processed_count.load(Ordering::Relaxed)
    }

    /// Aggregates a batch of user records
    ///
    /// # Arguments
    /// * `users` - Records to count
    ///
    /// # Returns
    /// Counts for this batch only; the running total is tracked separately
    pub fn process(&self, users: &[UserRecord]) -> UserStats {
        let stats = users.iter().fold(
            UserStats {
                total_users: users.len(),
                ..Default::default()
            },
            |mut stats, user| {
                if is_valid_email(user.email_or_empty()) {
                    stats.valid_emails += 1;
                }
                if user.is_admin() {
                    stats.admin_users += 1;
                }
                if user.is_active() {
                    stats.active_users += 1;
                }
                stats
            },
        );

        let previous = self.processed_count.fetch_add(stats.total_users, Ordering::Relaxed);
        debug!(
            batch = stats.total_users,
            processed = previous + stats.total_users,
            "Processed user batch"
        );

        stats
    }

    /// Aggregates raw JSON values
    ///
    /// Non-object entries are still counted in `total_users` but match
    /// nothing else.
    pub fn process_json(&self, users: &[Value]) -> UserStats {
        let records: Vec<UserRecord> = users.iter().map(UserRecord::from_value).collect();
        self.process(&records)
    }
}
