use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::file::load_config_file;
use crate::global;
use crate::ConfigError;

/// Read-only typed access to a JSON configuration document.
///
/// The document is parsed once at construction and split into three views:
/// the full top-level object, the `"AppSettings"` object, and the
/// `"ConnectionStrings"` object. Either reserved section may be absent, in
/// which case its view is empty. Nothing mutates after construction, so a
/// store can be shared freely across threads.
///
/// Lenient lookups return `Ok(None)` for absent keys; the `require_*`
/// variants turn an absent key into an error instead.
///
/// ## Example
///
/// ```
/// use app_config::ConfigStore;
/// use serde_json::json;
///
/// let config = ConfigStore::from_document(json!({
///     "AppSettings": { "Greeting": "hello" },
///     "ConnectionStrings": { "Default": "Server=localhost" },
/// }));
///
/// let greeting: Option<String> = config.app_setting("Greeting")?;
/// assert_eq!(greeting.as_deref(), Some("hello"));
/// assert_eq!(config.connection_string("Default")?, Some("Server=localhost"));
/// # Ok::<(), app_config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    document: Map<String, Value>,
    app_settings: Map<String, Value>,
    connection_strings: Map<String, Value>,
}

impl ConfigStore {
    /// Loads configuration from a JSON file.
    ///
    /// Fails if the file does not exist, cannot be read, or does not parse
    /// as a JSON object.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::split(load_config_file(path.as_ref())?))
    }

    /// Builds a store from an already-parsed JSON value.
    ///
    /// Any value other than an object (including `Null`) is treated as an
    /// empty document, so this never fails.
    pub fn from_document(document: Value) -> Self {
        match document {
            Value::Object(map) => Self::split(map),
            _ => Self::split(Map::new()),
        }
    }

    /// Builds a store over an empty document. Every lenient lookup returns
    /// `Ok(None)` and every `require_*` lookup fails.
    pub fn empty() -> Self {
        Self::split(Map::new())
    }

    /// Returns the process-wide store, loading it on first access.
    ///
    /// The first call loads `app-config.json` from the running program's
    /// directory. If that fails for any reason the failure is logged and an
    /// empty store is installed instead, so this accessor always yields a
    /// usable instance and never propagates a load error. Initialization is
    /// guarded, so concurrent first callers all observe the same instance
    /// backed by a single load.
    pub fn application() -> &'static ConfigStore {
        global::application()
    }

    fn split(document: Map<String, Value>) -> Self {
        let app_settings = section_object(&document, "AppSettings");
        let connection_strings = section_object(&document, "ConnectionStrings");
        Self {
            document,
            app_settings,
            connection_strings,
        }
    }

    /// Looks up a value in the `AppSettings` section and converts it to `T`.
    ///
    /// Scalar values are coerced directly; nested objects are mapped
    /// field-by-field onto `T`. Returns `Ok(None)` if the setting is not
    /// defined, and [`ConfigError::Conversion`] if the stored value cannot
    /// produce a `T`.
    pub fn app_setting<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, ConfigError> {
        self.app_settings
            .get(name)
            .map(|value| convert(name, value))
            .transpose()
    }

    /// Like [`app_setting`](Self::app_setting), but an absent setting is a
    /// [`ConfigError::MissingSetting`] error.
    pub fn require_app_setting<T: DeserializeOwned>(&self, name: &str) -> Result<T, ConfigError> {
        self.app_setting(name)?
            .ok_or_else(|| ConfigError::MissingSetting(name.to_string()))
    }

    /// Looks up a named connection string.
    ///
    /// Returns `Ok(None)` if the name is not defined, and
    /// [`ConfigError::ConnectionStringType`] if the stored value is not a
    /// JSON string.
    pub fn connection_string(&self, name: &str) -> Result<Option<&str>, ConfigError> {
        match self.connection_strings.get(name) {
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(ConfigError::ConnectionStringType(name.to_string())),
            None => Ok(None),
        }
    }

    /// Like [`connection_string`](Self::connection_string), but an absent
    /// name is a [`ConfigError::MissingConnectionString`] error.
    pub fn require_connection_string(&self, name: &str) -> Result<&str, ConfigError> {
        self.connection_string(name)?
            .ok_or_else(|| ConfigError::MissingConnectionString(name.to_string()))
    }

    /// Looks up any top-level key of the document and converts its subtree
    /// to `T`.
    ///
    /// Unlike [`app_setting`](Self::app_setting) this addresses the whole
    /// document, including keys outside the two reserved sections. Returns
    /// `Ok(None)` if the key is not defined; callers that want a
    /// default-initialized instance for a missing section can chain
    /// `.unwrap_or_default()`.
    pub fn section<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, ConfigError> {
        self.document
            .get(name)
            .map(|value| convert(name, value))
            .transpose()
    }

    /// Like [`section`](Self::section), but an absent key is a
    /// [`ConfigError::MissingSection`] error.
    pub fn require_section<T: DeserializeOwned>(&self, name: &str) -> Result<T, ConfigError> {
        self.section(name)?
            .ok_or_else(|| ConfigError::MissingSection(name.to_string()))
    }
}

/// Returns the object stored under `key`, or an empty map if the key is
/// absent or holds a non-object value.
fn section_object(document: &Map<String, Value>, key: &str) -> Map<String, Value> {
    match document.get(key) {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

fn convert<T: DeserializeOwned>(name: &str, value: &Value) -> Result<T, ConfigError> {
    serde_json::from_value(value.clone()).map_err(|e| ConfigError::Conversion {
        name: name.to_string(),
        source: e,
    })
}
