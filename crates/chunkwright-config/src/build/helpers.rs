use chunkwright_chunks::{DEFAULT_CATCH_ALL, DEFAULT_DEPENDENCY_ROOT};

use crate::build::chunks::ChunkRuleOptions;
use crate::build::types::FrameworkPlugin;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_plugins() -> Vec<FrameworkPlugin> {
    vec![FrameworkPlugin::Vue]
}

pub(crate) fn default_chunk_size_warning_limit() -> u32 {
    1000
}

pub(crate) fn default_dependency_root() -> String {
    DEFAULT_DEPENDENCY_ROOT.to_string()
}

pub(crate) fn default_catch_all() -> Option<String> {
    Some(DEFAULT_CATCH_ALL.to_string())
}

pub(crate) fn default_rules() -> Vec<ChunkRuleOptions> {
    vec![
        ChunkRuleOptions {
            name: "p5".to_string(),
            package: "p5".to_string(),
            prefix: false,
        },
        ChunkRuleOptions {
            name: "vue-vendor".to_string(),
            package: "vue".to_string(),
            prefix: true,
        },
    ]
}
