//! Project-level configuration and profile merging.
//!
//! A project config is the base [`BuildOptions`] plus named profiles that
//! override parts of it. For file discovery, see the `discovery` module.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::build::BuildOptions;
use crate::error::{ConfigError, Result as ConfigResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectConfig {
    #[serde(default)]
    pub build: BuildOptions,

    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
}

/// Partial override applied on top of the base config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProfileConfig {
    #[serde(default)]
    pub build: Value,
}

impl ProjectConfig {
    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use chunkwright_config::ProjectConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "build": {
    ///         "chunk_size_warning_limit": 500,
    ///         "sourcemap": true
    ///     }
    /// });
    ///
    /// let config = ProjectConfig::from_value(value).unwrap();
    /// assert_eq!(config.build.chunk_size_warning_limit, 500);
    /// assert!(config.build.css_code_split);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Profile names, sorted.
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Apply the named profile's overrides to the base config.
    ///
    /// Objects merge key by key; arrays and scalars replace the base value.
    /// `None` returns the config unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ProfileNotFound` for an unknown profile and
    /// `ConfigError::InvalidProfileOverride` when the merged result is not a
    /// valid config.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let profile_cfg = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if !profile_cfg.build.is_null() {
            let mut base = serde_json::to_value(&self.build).map_err(|err| {
                ConfigError::InvalidProfileOverride {
                    message: err.to_string(),
                }
            })?;
            merge_values(&mut base, &profile_cfg.build);
            self.build = serde_json::from_value(base).map_err(|err| {
                ConfigError::InvalidProfileOverride {
                    message: format!("profile '{name}': {err}"),
                }
            })?;
        }

        debug!(profile = name, "applied config profile");
        Ok(self)
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
