//! Config template for the init command.

/// Starter `chunkwright.toml` spelling out every default.
pub const CONFIG_TEMPLATE: &str = r#"# chunkwright configuration

[build]
plugins = ["vue"]
chunk_size_warning_limit = 1000
minify = "esbuild"
target = "esnext"
css_code_split = true
sourcemap = false

[build.manual_chunks]
enabled = true
dependency_root = "node_modules"
# catch_all = false leaves unmatched dependencies to the bundler
catch_all = "vendor"
match_mode = "substring"

[[build.manual_chunks.rules]]
name = "p5"
package = "p5"

[[build.manual_chunks.rules]]
name = "vue-vendor"
package = "vue"
prefix = true

# Profiles override parts of [build]; select one with --profile.
# [profiles.debug.build]
# sourcemap = true
# minify = false
"#;
