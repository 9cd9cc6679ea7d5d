//! Configuration loading
//!
//! Reads a JSON configuration document and derives typed [`AppSettings`]
//! from it. Loading returns a typed error; callers that prefer an empty
//! configuration on failure use [`load_config_or_default`].

mod error;
mod loader;
mod settings;

pub use error::ConfigError;
pub use loader::{load_config, load_config_or_default, ConfigMap, DEFAULT_CONFIG_PATH};
pub use settings::{AppSettings, DataFormat, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
