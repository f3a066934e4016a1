use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not determine program directory: {0}")]
    ProgramDir(std::io::Error),

    #[error("setting not defined: {0}")]
    MissingSetting(String),

    #[error("connection string not defined: {0}")]
    MissingConnectionString(String),

    #[error("config section not defined: {0}")]
    MissingSection(String),

    #[error("connection string '{0}' is not a string")]
    ConnectionStringType(String),

    #[error("failed to convert config value '{name}': {source}")]
    Conversion {
        name: String,
        source: serde_json::Error,
    },
}
