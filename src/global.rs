//! Process-wide configuration instance.

use std::path::PathBuf;

use once_cell::sync::OnceCell;

use crate::{ConfigError, ConfigStore};

static APPLICATION: OnceCell<ConfigStore> = OnceCell::new();

/// Returns the process-wide store, loading `<program-dir>/app-config.json`
/// on first access.
///
/// Load failures are absorbed: the failure is logged and an empty store is
/// installed, so callers always get a usable instance. `get_or_init`
/// guarantees a single load even under concurrent first access.
pub(crate) fn application() -> &'static ConfigStore {
    APPLICATION.get_or_init(|| match load_default() {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load application config, using empty configuration");
            ConfigStore::empty()
        }
    })
}

fn load_default() -> Result<ConfigStore, ConfigError> {
    ConfigStore::from_file(default_config_path()?)
}

/// Resolves `app-config.json` next to the running executable.
fn default_config_path() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::ProgramDir)?;
    let dir = exe.parent().ok_or_else(|| {
        ConfigError::ProgramDir(std::io::Error::other("executable has no parent directory"))
    })?;
    Ok(dir.join("app-config.json"))
}
