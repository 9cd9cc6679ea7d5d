//! Typed application settings

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::loader::ConfigMap;

/// Default number of retries for outbound calls
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default timeout for outbound calls, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Data file formats the application accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Json,
    Csv,
    Xml,
}

impl DataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Xml => "xml",
        }
    }

    /// Parses a format name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// Format implied by a file's extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        path.extension().and_then(|ext| ext.to_str()).and_then(Self::parse)
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Timeout for outbound calls, in seconds
    #[serde(default = "default_timeout", rename = "default_timeout")]
    pub default_timeout_secs: u64,

    #[serde(default = "default_formats")]
    pub supported_formats: Vec<DataFormat>,
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_formats() -> Vec<DataFormat> {
    vec![DataFormat::Json, DataFormat::Csv, DataFormat::Xml]
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            default_timeout_secs: DEFAULT_TIMEOUT_SECS,
            supported_formats: default_formats(),
        }
    }
}

impl AppSettings {
    /// Reads settings from a loaded config document
    ///
    /// Missing or mistyped keys fall back to defaults. Unknown format
    /// names are skipped with a warning.
    pub fn from_config(config: &ConfigMap) -> Self {
        let mut settings = Self::default();

        if let Some(retries) = config
            .get("max_retries")
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
        {
            settings.max_retries = retries;
        }

        if let Some(timeout) = config.get("default_timeout").and_then(Value::as_u64) {
            settings.default_timeout_secs = timeout;
        }

        if let Some(formats) = config.get("supported_formats").and_then(Value::as_array) {
            settings.supported_formats = formats
                .iter()
                .filter_map(|v| {
                    let name = v.as_str()?;
                    let format = DataFormat::parse(name);
                    if format.is_none() {
                        warn!(format = name, "Ignoring unsupported data format");
                    }
                    format
                })
                .collect();
        }

        settings
    }

    /// Returns true if the file's extension names a supported format
    pub fn supports(&self, path: &Path) -> bool {
        DataFormat::from_extension(path)
            .map(|format| self.supported_formats.contains(&format))
            .unwrap_or(false)
    }
}
