//! File-based document loading.

use std::path::Path;

use serde_json::{Map, Value};

use crate::ConfigError;

/// Loads and parses a JSON config file into its top-level object.
///
/// Parsing directly into a map rejects documents whose top-level value is not
/// a JSON object.
pub(crate) fn load_config_file(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
