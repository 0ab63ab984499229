//! Error types for configuration validation and loading.

use std::path::PathBuf;

use chunkwright_chunks::PolicyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("profile '{0}' is not defined")]
    ProfileNotFound(String),

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // Schema validation errors (no filesystem checks)
    #[error("invalid manual chunk policy: {0}")]
    InvalidChunkPolicy(#[from] PolicyError),

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
