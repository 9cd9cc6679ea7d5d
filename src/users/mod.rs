//! User-record aggregation
//!
//! Counts totals, valid emails, admins and active users over a batch of
//! user records. The aggregator keeps a running processed count across
//! batches.

mod types;


pub use types::*;

/// Aggregator for user-record statistics
pub mod aggregator;

pub use aggregator::UserAggregator;
