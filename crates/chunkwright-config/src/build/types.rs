use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Framework plugin the external bundler should load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkPlugin {
    /// Vue single-file components
    Vue,
    /// React (JSX, fast refresh)
    React,
    /// Preact
    Preact,
    /// Svelte components
    Svelte,
}

impl FrameworkPlugin {
    /// Package providing the plugin for the bundler.
    pub fn package(&self) -> &'static str {
        match self {
            Self::Vue => "@vitejs/plugin-vue",
            Self::React => "@vitejs/plugin-react",
            Self::Preact => "@preact/preset-vite",
            Self::Svelte => "@sveltejs/vite-plugin-svelte",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vue => "vue",
            Self::React => "react",
            Self::Preact => "preact",
            Self::Svelte => "svelte",
        }
    }
}

impl fmt::Display for FrameworkPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Code-compaction strategy for production output
///
/// Config files may also use booleans: `true` selects esbuild, `false`
/// disables minification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Minifier {
    /// esbuild minifier (fast, default)
    #[default]
    Esbuild,
    /// terser (slower, sometimes smaller output)
    Terser,
    /// No minification
    None,
}

impl Minifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Esbuild => "esbuild",
            Self::Terser => "terser",
            Self::None => "none",
        }
    }
}

impl FromStr for Minifier {
    type Err = ConfigError;

    /// Values are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "esbuild" | "true" => Ok(Self::Esbuild),
            "terser" => Ok(Self::Terser),
            "none" | "false" => Ok(Self::None),
            _ => Err(ConfigError::InvalidValue {
                field: "minify".to_string(),
                hint: Some(format!("'{s}' is not a minifier. Expected: esbuild, terser, none")),
            }),
        }
    }
}

impl fmt::Display for Minifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MinifierRepr {
    Flag(bool),
    Named(String),
}

impl<'de> Deserialize<'de> for Minifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match MinifierRepr::deserialize(deserializer)? {
            MinifierRepr::Flag(true) => Ok(Self::Esbuild),
            MinifierRepr::Flag(false) => Ok(Self::None),
            MinifierRepr::Named(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Names accepted by `Minifier::from_str`.
const MINIFIER_NAMES: &[&str] = &["esbuild", "terser", "none", "true", "false"];

impl JsonSchema for Minifier {
    fn schema_name() -> Cow<'static, str> {
        "Minifier".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Minifier name (esbuild, terser, none; case-insensitive), or a boolean",
            "anyOf": [
                { "type": "string", "pattern": case_insensitive_pattern(MINIFIER_NAMES) },
                { "type": "boolean" }
            ]
        })
    }
}

/// Anchored regex matching any of `names` regardless of ASCII case.
fn case_insensitive_pattern(names: &[&str]) -> String {
    let alternatives: Vec<String> = names
        .iter()
        .map(|name| {
            name.chars()
                .map(|c| {
                    if c.is_ascii_alphabetic() {
                        format!("[{}{}]", c.to_ascii_uppercase(), c.to_ascii_lowercase())
                    } else {
                        c.to_string()
                    }
                })
                .collect()
        })
        .collect();
    format!("^({})$", alternatives.join("|"))
}

/// Target ECMAScript version for syntax downleveling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    /// ECMAScript 2015 (ES6)
    ES2015,
    /// ECMAScript 2016
    ES2016,
    /// ECMAScript 2017
    ES2017,
    /// ECMAScript 2018
    ES2018,
    /// ECMAScript 2019
    ES2019,
    /// ECMAScript 2020
    ES2020,
    /// ECMAScript 2021
    ES2021,
    /// ECMAScript 2022
    ES2022,
    /// ECMAScript 2023
    ES2023,
    /// ECMAScript 2024
    ES2024,
    /// Latest ECMAScript, no downleveling (default)
    #[default]
    ESNext,
}

impl EsTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ES2015 => "es2015",
            Self::ES2016 => "es2016",
            Self::ES2017 => "es2017",
            Self::ES2018 => "es2018",
            Self::ES2019 => "es2019",
            Self::ES2020 => "es2020",
            Self::ES2021 => "es2021",
            Self::ES2022 => "es2022",
            Self::ES2023 => "es2023",
            Self::ES2024 => "es2024",
            Self::ESNext => "esnext",
        }
    }
}

impl fmt::Display for EsTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minifier_accepts_names_and_booleans() {
        let parse = |v| serde_json::from_value::<Minifier>(v).unwrap();
        assert_eq!(parse(json!("esbuild")), Minifier::Esbuild);
        assert_eq!(parse(json!("Terser")), Minifier::Terser);
        assert_eq!(parse(json!("none")), Minifier::None);
        assert_eq!(parse(json!(true)), Minifier::Esbuild);
        assert_eq!(parse(json!(false)), Minifier::None);
    }

    #[test]
    fn minifier_rejects_unknown_names() {
        let err = serde_json::from_value::<Minifier>(json!("uglify")).unwrap_err();
        assert!(err.to_string().contains("uglify"));
    }

    #[test]
    fn minifier_schema_accepts_booleans_and_any_case() {
        let schema = serde_json::to_value(schemars::schema_for!(Minifier)).unwrap();
        let any_of = schema["anyOf"].as_array().unwrap();
        assert!(any_of.contains(&json!({ "type": "boolean" })));

        let pattern = any_of[0]["pattern"].as_str().unwrap();
        assert!(pattern.starts_with("^([Ee][Ss][Bb][Uu][Ii][Ll][Dd]|"), "{pattern}");
        assert!(pattern.contains("|[Tt][Ee][Rr][Ss][Ee][Rr]|"), "{pattern}");
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Minifier::Esbuild).unwrap(), json!("esbuild"));
        assert_eq!(serde_json::to_value(EsTarget::ESNext).unwrap(), json!("esnext"));
        assert_eq!(serde_json::to_value(EsTarget::ES2020).unwrap(), json!("es2020"));
        assert_eq!(serde_json::to_value(FrameworkPlugin::Vue).unwrap(), json!("vue"));
    }

    #[test]
    fn display_matches_serialized_names() {
        for target in [EsTarget::ES2015, EsTarget::ES2022, EsTarget::ESNext] {
            assert_eq!(serde_json::to_value(target).unwrap(), json!(target.to_string()));
        }
        assert_eq!(FrameworkPlugin::Svelte.to_string(), "svelte");
        assert_eq!(FrameworkPlugin::Vue.package(), "@vitejs/plugin-vue");
    }
}
