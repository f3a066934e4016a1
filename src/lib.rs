//! Typed access to JSON-based application configuration files.
//!
//! A [`ConfigStore`] parses a JSON document once and exposes read-only typed
//! lookups against three views: free-form application settings under the
//! `"AppSettings"` key, string connection strings under `"ConnectionStrings"`,
//! and arbitrary top-level sections deserialized into caller-specified types.
//!
//! ```no_run
//! use app_config::ConfigStore;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Limits {
//!     max_connections: u32,
//!     timeout_secs: u64,
//! }
//!
//! let config = ConfigStore::from_file("app-config.json")?;
//!
//! let greeting: Option<String> = config.app_setting("Greeting")?;
//! let db = config.require_connection_string("Default")?;
//! let limits: Option<Limits> = config.section("Limits")?;
//! # Ok::<(), app_config::ConfigError>(())
//! ```
//!
//! For code that wants a process-wide instance instead of an explicitly
//! injected one, [`ConfigStore::application`] lazily loads
//! `app-config.json` from the running program's directory exactly once and
//! falls back to an empty store (with a logged warning) if that fails.

mod error;
mod file;
mod global;
mod store;

pub use error::ConfigError;
pub use store::ConfigStore;
