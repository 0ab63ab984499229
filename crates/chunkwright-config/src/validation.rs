//! Pluggable config validation strategies

use std::collections::HashSet;

use crate::build::BuildOptions;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate build options
    fn validate(&self, config: &BuildOptions) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use chunkwright_config::{BuildOptions, ConfigValidator, SchemaValidator};
///
/// SchemaValidator.validate(&BuildOptions::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildOptions) -> Result<()> {
        if config.chunk_size_warning_limit == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "chunk_size_warning_limit must be greater than 0".to_string(),
                hint: Some("Use a limit in kB, for example 500 or 1000".to_string()),
            });
        }

        let mut seen = HashSet::with_capacity(config.plugins.len());
        for plugin in &config.plugins {
            if !seen.insert(*plugin) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("plugin '{plugin}' is listed more than once"),
                    hint: Some("Remove the duplicate entry from 'plugins'".to_string()),
                });
            }
        }

        let chunks = &config.manual_chunks;
        let names = chunks
            .rules
            .iter()
            .map(|rule| rule.name.as_str())
            .chain(chunks.catch_all.as_deref());
        for name in names {
            if name.contains('\\') || name.starts_with('/') {
                return Err(ConfigError::SchemaValidation {
                    message: format!("chunk name '{name}' is not a relative output name"),
                    hint: Some(
                        "Chunk names become file names; use '/' only between directories"
                            .to_string(),
                    ),
                });
            }
        }

        // Compiling the policy checks the rules themselves.
        chunks.to_policy()?;

        Ok(())
    }
}

/// Convenience function for schema-only validation
///
/// # Example
///
/// ```
/// use chunkwright_config::{validate, BuildOptions};
///
/// validate(&BuildOptions::default()).unwrap();
/// ```
pub fn validate(config: &BuildOptions) -> Result<()> {
    SchemaValidator.validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::FrameworkPlugin;

    #[test]
    fn schema_validator_accepts_defaults() {
        assert!(SchemaValidator.validate(&BuildOptions::default()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_zero_limit() {
        let config = BuildOptions {
            chunk_size_warning_limit: 0,
            ..Default::default()
        };
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_duplicate_plugins() {
        let config = BuildOptions {
            plugins: vec![FrameworkPlugin::Vue, FrameworkPlugin::React, FrameworkPlugin::Vue],
            ..Default::default()
        };
        let err = SchemaValidator.validate(&config).unwrap_err();
        assert!(err.to_string().contains("vue"));
    }

    #[test]
    fn validate_helper_works() {
        assert!(validate(&BuildOptions::default()).is_ok());
    }
}
