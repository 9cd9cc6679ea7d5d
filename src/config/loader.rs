//! JSON config file loading

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, error};

use super::error::ConfigError;

/// Default location of the application config
pub const DEFAULT_CONFIG_PATH: &str = "/etc/app/config.json";

/// Parsed configuration document
pub type ConfigMap = Map<String, Value>;

/// Loads a JSON config file
///
/// # Arguments
/// * `path` - Path of the config file
///
/// # Returns
/// The top-level JSON object, or the reason it could not be loaded
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigMap, ConfigError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::not_found(path.display().to_string()),
        _ => ConfigError::Io(e),
    })?;

    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => {
            debug!(path = %path.display(), keys = map.len(), "Loaded config");
            Ok(map)
        }
        other => Err(ConfigError::NotAnObject(json_kind(&other).to_string())),
    }
}

/// Loads a JSON config file, falling back to an empty map
///
/// Failures are logged at error level and never returned.
pub fn load_config_or_default(path: impl AsRef<Path>) -> ConfigMap {
    let path = path.as_ref();
    match load_config(path) {
        Ok(map) => map,
        Err(e) => {
            error!(path = %path.display(), "{}", e);
            ConfigMap::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
