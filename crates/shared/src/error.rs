//! Error types for the few fallible edges of the roster crates.

use thiserror::Error;

/// A presence string that is not one of the known wire values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown presence state: {0:?}")]
pub struct ParsePresenceError(pub String);

/// Failure to load a [`TileConfig`](crate::TileConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
