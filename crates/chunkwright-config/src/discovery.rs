//! File-based config discovery for CLI use
//!
//! Handles finding and loading chunkwright configuration files from the
//! filesystem, layered with environment overrides through figment.

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};

/// Name of the TOML config file.
pub const CONFIG_FILE: &str = "chunkwright.toml";

/// Field read from package.json.
pub const PACKAGE_JSON_FIELD: &str = "chunkwright";

/// Prefix for environment overrides; `__` separates nested keys.
///
/// `CHUNKWRIGHT_BUILD__SOURCEMAP=true` sets `build.sourcemap`.
pub const ENV_PREFIX: &str = "CHUNKWRIGHT_";

/// File-based configuration discovery
///
/// Searches for a configuration file in the root directory and loads it on
/// top of the defaults, then applies environment overrides.
/// Library users can use `ProjectConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use chunkwright_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: chunkwright.toml
    /// 2. package.json (chunkwright field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.is_file() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = match fs::read_to_string(&pkg_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %pkg_path.display(), error = %e, "skipping unreadable package.json");
                return None;
            }
        };
        let parsed: Value = match serde_json::from_str(&content) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(path = %pkg_path.display(), error = %e, "skipping malformed package.json");
                return None;
            }
        };
        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ProjectConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load the discovered config, or the defaults when there is none.
    pub fn load_or_default(&self) -> Result<ProjectConfig> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => {
                debug!(root = %self.root.display(), "no config file found, using defaults");
                extract(Figment::from(Serialized::defaults(ProjectConfig::default())), None)
            }
        }
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<ProjectConfig> {
        self.load()?.materialize_profile(Some(profile))
    }

    /// Load config from a specific file path
    ///
    /// `package.json` files are read from their `chunkwright` field; any
    /// other file is parsed as TOML.
    pub fn load_from(&self, path: &Path) -> Result<ProjectConfig> {
        debug!(path = %path.display(), "loading config file");

        let content = fs::read_to_string(path)?;
        let value = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            package_json_value(path, &content)?
        } else {
            let table: toml::Table = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: format!("invalid TOML syntax: {e}"),
            })?;
            serde_json::to_value(table).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        let figment = Figment::from(Serialized::defaults(ProjectConfig::default()))
            .merge(Serialized::defaults(value));
        extract(figment, Some(path))
    }
}

fn package_json_value(path: &Path, content: &str) -> Result<Value> {
    let mut parsed: Value = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: format!("invalid JSON: {e}"),
    })?;

    match parsed.get_mut(PACKAGE_JSON_FIELD).map(Value::take) {
        Some(Value::Null) | None => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some(format!(
                "Add a non-null '{PACKAGE_JSON_FIELD}' field to your package.json"
            )),
        }),
        Some(value) => Ok(value),
    }
}

fn extract(figment: Figment, path: Option<&Path>) -> Result<ProjectConfig> {
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| match path {
            Some(path) => ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
            None => ConfigError::InvalidValue {
                field: "environment".to_string(),
                hint: Some(e.to_string()),
            },
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.text())
    }

    #[test]
    fn malformed_package_json_is_skipped_with_warning() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{ \"chunkwright\": ").unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        let (found, logs) = with_captured_logs(|| discovery.find());
        assert!(found.is_none());
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("skipping malformed package.json"), "{logs}");
    }

    #[test]
    fn missing_package_json_is_silent() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        let (found, logs) = with_captured_logs(|| discovery.find());
        assert!(found.is_none());
        assert!(!logs.contains("package.json"), "{logs}");
    }

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn find_prefers_toml_over_package_json() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[build]\nsourcemap = true\n").unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "app", "chunkwright": { "build": {} } }"#,
        )
        .unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        assert_eq!(discovery.find().unwrap(), config_path);
    }

    #[test]
    fn find_ignores_package_json_without_field() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "app" }"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());

        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "app", "chunkwright": null }"#,
        )
        .unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        let result = discovery.load();
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound));
    }

    #[test]
    fn load_reports_toml_syntax_errors_with_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[build\nsourcemap = ").unwrap();

        let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
        match err {
            ConfigError::Parse { path, message } => {
                assert_eq!(path, config_path);
                assert!(message.contains("TOML"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
