//! Shared utilities for command implementations.
//!
//! - Path resolution against `--cwd`
//! - Configuration loading, profile selection and validation
//! - Classifier construction from build options

use std::path::{Path, PathBuf};

use chunkwright_chunks::ChunkClassifier;
use chunkwright_config::{BuildOptions, ConfigDiscovery};
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::error::{Result, ResultExt};

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Project directory from `--cwd`, or the process working directory.
pub fn project_dir(global: &GlobalArgs) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    Ok(match &global.cwd {
        Some(dir) => resolve_path(dir, &current),
        None => current,
    })
}

/// Load, profile and validate the build options for this invocation.
///
/// `--config` loads that file; otherwise the project directory is searched
/// and the defaults apply when nothing is found.
pub fn load_build_options(global: &GlobalArgs) -> Result<BuildOptions> {
    let root = project_dir(global)?;
    let discovery = ConfigDiscovery::new(&root);

    let config = match &global.config {
        Some(path) => {
            let path = resolve_path(path, &root);
            discovery.load_from(&path).with_path(&path)?
        }
        None => discovery.load_or_default()?,
    };

    let config = config.materialize_profile(global.profile.as_deref())?;
    chunkwright_config::validate(&config.build)?;

    debug!(
        profile = global.profile.as_deref().unwrap_or("<none>"),
        limit_kb = config.build.chunk_size_warning_limit,
        "build options loaded"
    );
    Ok(config.build)
}

/// Classifier for the configured policy.
///
/// Disabled manual chunks classify every module as "no opinion".
pub fn classifier(options: &BuildOptions) -> Result<Box<dyn ChunkClassifier>> {
    Ok(match options.chunk_policy()? {
        Some(policy) => Box::new(policy),
        None => Box::new(|_: &str| -> Option<&'static str> { None }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_path_keeps_absolute_paths() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_path(Path::new("/etc/chunkwright.toml"), cwd),
            PathBuf::from("/etc/chunkwright.toml")
        );
        assert_eq!(
            resolve_path(Path::new("dist"), cwd),
            PathBuf::from("/work/dist")
        );
    }

    #[test]
    fn disabled_policy_has_no_opinion() {
        let mut options = BuildOptions::default();
        options.manual_chunks.enabled = false;
        let classifier = classifier(&options).unwrap();
        assert_eq!(classifier.classify("/repo/node_modules/p5/lib/p5.js"), None);
    }

    #[test]
    fn default_policy_classifies() {
        let classifier = classifier(&BuildOptions::default()).unwrap();
        assert_eq!(
            classifier.classify("/repo/node_modules/vue/dist/vue.js"),
            Some("vue-vendor")
        );
    }
}
