// dataprep library
// Utilities for user-record statistics, email validation, descriptive
// statistics, config loading and log-level counting

pub mod config;
pub mod directory;
pub mod error;
pub mod logs;
pub mod stats;
pub mod users;
pub mod validation;

pub use config::{load_config, load_config_or_default, AppSettings, ConfigError, ConfigMap};
pub use directory::{HttpUserDirectory, MockUserDirectory, User, UserDirectory};
pub use error::AppError;
pub use logs::{parse_log_file, LevelCounts, LogLevel};
pub use stats::{calculate_statistics, Statistics};
pub use users::{UserAggregator, UserRecord, UserStats};
pub use validation::{is_valid_email, validate_new_user, EmailRule, ValidationError};
