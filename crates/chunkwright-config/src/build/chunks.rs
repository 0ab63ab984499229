use chunkwright_chunks::{ChunkRule, MatchMode, VendorChunkPolicy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::build::helpers::{
    default_catch_all, default_dependency_root, default_rules, default_true,
};
use crate::error::Result;

/// Manual chunk policy configuration
///
/// Rules are checked in order and the first match wins. Third-party modules
/// no rule claims go to `catch_all`; first-party modules are left to the
/// bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ManualChunksOptions {
    /// Enable the manual chunk classifier
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Path segment marking third-party packages
    #[serde(default = "default_dependency_root")]
    pub dependency_root: String,

    /// Chunk for dependencies no rule matched
    ///
    /// `false` (or null) leaves them to the bundler; `true` selects `vendor`.
    #[serde(
        default = "default_catch_all",
        serialize_with = "catch_all::serialize",
        deserialize_with = "catch_all::deserialize"
    )]
    #[schemars(schema_with = "catch_all::schema")]
    pub catch_all: Option<String>,

    /// How identifiers are matched against rules
    #[serde(default)]
    pub match_mode: MatchModeOption,

    /// Package rules, checked in order
    #[serde(default = "default_rules")]
    pub rules: Vec<ChunkRuleOptions>,
}

impl Default for ManualChunksOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            dependency_root: default_dependency_root(),
            catch_all: default_catch_all(),
            match_mode: MatchModeOption::default(),
            rules: default_rules(),
        }
    }
}

impl ManualChunksOptions {
    /// Compile the options into a classifier.
    ///
    /// Returns `Ok(None)` when manual chunking is disabled.
    pub fn to_policy(&self) -> Result<Option<VendorChunkPolicy>> {
        if !self.enabled {
            return Ok(None);
        }

        let mut builder = VendorChunkPolicy::builder()
            .dependency_root(self.dependency_root.as_str())
            .match_mode(self.match_mode.into())
            .rules(self.rules.iter().map(ChunkRuleOptions::to_rule));

        builder = match &self.catch_all {
            Some(name) => builder.catch_all(name.as_str()),
            None => builder.no_catch_all(),
        };

        Ok(Some(builder.build()?))
    }
}

/// `catch_all` is a chunk name or a flag, so TOML files can disable it.
///
/// A disabled catch-all serializes as `false`.
mod catch_all {
    use chunkwright_chunks::DEFAULT_CATCH_ALL;
    use schemars::{json_schema, Schema, SchemaGenerator};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CatchAllRepr {
        Flag(bool),
        Named(String),
    }

    pub(super) fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_bool(false),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<CatchAllRepr>::deserialize(deserializer)? {
            None | Some(CatchAllRepr::Flag(false)) => None,
            Some(CatchAllRepr::Flag(true)) => Some(DEFAULT_CATCH_ALL.to_string()),
            Some(CatchAllRepr::Named(name)) => Some(name),
        })
    }

    pub(super) fn schema(_: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Chunk name, or false to leave unmatched dependencies to the bundler",
            "anyOf": [
                { "type": "string", "minLength": 1 },
                { "type": "boolean" },
                { "type": "null" }
            ],
            "default": DEFAULT_CATCH_ALL
        })
    }
}

/// A single package rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChunkRuleOptions {
    /// Output chunk name
    pub name: String,

    /// Package name, or package name prefix when `prefix` is set
    pub package: String,

    /// Match every package whose name starts with `package`
    #[serde(default)]
    pub prefix: bool,
}

impl ChunkRuleOptions {
    pub fn to_rule(&self) -> ChunkRule {
        if self.prefix {
            ChunkRule::prefix(self.name.as_str(), self.package.as_str())
        } else {
            ChunkRule::package(self.name.as_str(), self.package.as_str())
        }
    }
}

/// Identifier matching mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchModeOption {
    /// Substring containment (default)
    #[default]
    Substring,
    /// Whole path segments only
    Segment,
}

impl From<MatchModeOption> for MatchMode {
    fn from(mode: MatchModeOption) -> Self {
        match mode {
            MatchModeOption::Substring => MatchMode::Substring,
            MatchModeOption::Segment => MatchMode::Segment,
        }
    }
}
