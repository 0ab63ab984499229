//! Errors raised while building a chunk policy.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolicyError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("chunk rule #{index} has an empty chunk name")]
    EmptyName { index: usize },

    #[error("chunk rule '{name}' has an empty package name")]
    EmptyPackage { name: String },

    #[error("chunk rule '{name}' has an invalid package name '{package}'")]
    InvalidPackage { name: String, package: String },

    #[error("dependency root marker cannot be empty")]
    EmptyDependencyRoot,

    #[error("catch-all chunk name cannot be empty")]
    EmptyCatchAll,
}
