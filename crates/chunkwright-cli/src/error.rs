//! Error handling for the chunkwright CLI.
//!
//! Commands return [`CliError`]; `main` turns it into a miette report with
//! [`cli_error_to_miette`].

use std::path::PathBuf;

use chunkwright_config::ConfigError;
use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Refusing to overwrite an existing file
    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Chunks exceeded the size limit with --deny
    #[error("{count} chunk(s) exceed the {limit_kb} kB size warning limit")]
    OversizedChunks { count: usize, limit_kb: u32 },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output directory traversal errors
    #[error("Failed to scan directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into `CliError::FileNotFound(path)`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) | CliError::Config(ConfigError::Io(io_err))
                if io_err.kind() == std::io::ErrorKind::NotFound =>
            {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::NotFound) => miette::miette!(
            help = "Run 'chunkwright init' or pass --config <path>",
            "No chunkwright.toml or package.json \"chunkwright\" field found"
        ),
        CliError::Config(ConfigError::ProfileNotFound(name)) => miette::miette!(
            help = "Define it under [profiles.<name>] in chunkwright.toml",
            "Profile '{}' is not defined",
            name
        ),
        CliError::Config(ConfigError::SchemaValidation {
            message,
            hint: Some(hint),
        }) => miette::miette!(help = hint, "Invalid configuration: {}", message),
        CliError::AlreadyExists(path) => miette::miette!(
            help = "Pass --force to overwrite it",
            "{} already exists",
            path.display()
        ),
        CliError::OversizedChunks { count, limit_kb } => miette::miette!(
            help = "Split large dependencies into their own chunks or raise chunk_size_warning_limit",
            "{} chunk(s) exceed the {} kB size warning limit",
            count,
            limit_kb
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NotFound.into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/ids.txt").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(p) if p == PathBuf::from("/test/ids.txt")));
    }

    #[test]
    fn test_result_ext_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(matches!(result.with_path("x").unwrap_err(), CliError::Io(_)));
    }

    #[test]
    fn test_oversized_message() {
        let err = CliError::OversizedChunks {
            count: 2,
            limit_kb: 1000,
        };
        assert_eq!(
            err.to_string(),
            "2 chunk(s) exceed the 1000 kB size warning limit"
        );
        let report = cli_error_to_miette(err);
        assert!(report.to_string().contains("1000 kB"));
    }
}
