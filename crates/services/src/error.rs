//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use imaging_core::model::ParseModalityError;

/// Errors emitted while loading `ExplorerSettings`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{var}: {source}")]
    Modality {
        var: &'static str,
        #[source]
        source: ParseModalityError,
    },
    #[error("{var}: expected a boolean, got {raw:?}")]
    InvalidBool { var: &'static str, raw: String },
    #[error("unknown log level {raw:?} (expected one of: error, warn, info, debug, trace)")]
    InvalidLogLevel { raw: String },
    #[error("viewport height must be positive")]
    InvalidViewportHeight,
}
