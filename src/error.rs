//! Error types for reading inputs and writing outputs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, parsing or serializing configuration.
#[derive(Error, Debug)]
pub enum ConfigIoError {
    /// A file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Source IO error
        source: std::io::Error,
    },

    /// Malformed JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A mapping could not be serialized
    #[error("failed to serialize YAML: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// A settings file parsed, but does not describe valid settings
    #[error("invalid settings in {}: {source}", .path.display())]
    Settings {
        /// Settings file
        path: PathBuf,
        /// Source YAML error
        source: serde_yaml::Error,
    },

    /// The document parsed, but is not a mapping
    #[error("expected a mapping, got {0}")]
    NotAMapping(String),
}

impl ConfigIoError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

/// Result type for config-io operations.
pub type Result<T> = std::result::Result<T, ConfigIoError>;
