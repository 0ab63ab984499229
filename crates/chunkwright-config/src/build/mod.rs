//! Build options passed through to the external bundler.

mod chunks;
mod helpers;
mod types;

use chunkwright_chunks::{ChunkSizeLimit, VendorChunkPolicy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use chunks::{ChunkRuleOptions, ManualChunksOptions, MatchModeOption};
pub use types::{EsTarget, FrameworkPlugin, Minifier};

use helpers::{default_chunk_size_warning_limit, default_plugins, default_true};

use crate::error::{ConfigError, Result};

/// Main build configuration
///
/// Built once at startup and shared by reference; nothing here is mutated
/// while the bundler runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BuildOptions {
    /// Framework plugins to load
    #[serde(default = "default_plugins")]
    pub plugins: Vec<FrameworkPlugin>,

    /// Chunk-size warning threshold in kB
    #[serde(default = "default_chunk_size_warning_limit")]
    pub chunk_size_warning_limit: u32,

    /// Minifier used for production output
    #[serde(default)]
    pub minify: Minifier,

    /// Minimum supported language level
    #[serde(default)]
    pub target: EsTarget,

    /// Split CSS per chunk instead of one stylesheet
    #[serde(default = "default_true")]
    pub css_code_split: bool,

    /// Emit source maps alongside output
    #[serde(default)]
    pub sourcemap: bool,

    /// Manual chunk classification
    #[serde(default)]
    pub manual_chunks: ManualChunksOptions,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            plugins: default_plugins(),
            chunk_size_warning_limit: default_chunk_size_warning_limit(), // 1000 kB
            minify: Minifier::Esbuild,
            target: EsTarget::ESNext,
            css_code_split: true,
            sourcemap: false,
            manual_chunks: ManualChunksOptions::default(),
        }
    }
}

impl BuildOptions {
    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use chunkwright_config::{BuildOptions, Minifier};
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "minify": "terser",
    ///     "sourcemap": true
    /// });
    ///
    /// let options = BuildOptions::from_value(value).unwrap();
    /// assert_eq!(options.minify, Minifier::Terser);
    /// assert!(options.sourcemap);
    /// assert_eq!(options.chunk_size_warning_limit, 1000);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "build".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "build".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Manual chunk classifier for these options, if enabled.
    ///
    /// ```
    /// use chunkwright_chunks::ChunkClassifier;
    /// use chunkwright_config::BuildOptions;
    ///
    /// let policy = BuildOptions::default().chunk_policy().unwrap().unwrap();
    /// assert_eq!(policy.classify("/repo/node_modules/p5/lib/p5.js"), Some("p5"));
    /// ```
    pub fn chunk_policy(&self) -> Result<Option<VendorChunkPolicy>> {
        self.manual_chunks.to_policy()
    }

    pub fn chunk_size_limit(&self) -> ChunkSizeLimit {
        ChunkSizeLimit::new(self.chunk_size_warning_limit)
    }
}
