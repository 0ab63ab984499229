//! Command implementations for the chunkwright CLI.
//!
//! - [`classify`] - Chunk name for individual module ids
//! - [`plan`] - Group a module list into chunks
//! - [`sizes`] - Size warnings for emitted chunks
//! - [`check`] - Configuration validation
//! - [`init`] - Starter config file
//! - [`schema`] - Config JSON schema
//!
//! Each command provides an `execute` function that takes the parsed
//! command arguments and returns a Result.

pub mod check;
pub mod classify;
pub mod init;
pub mod plan;
pub mod schema;
pub mod sizes;
mod templates;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use classify::execute as classify_execute;
pub use init::execute as init_execute;
pub use plan::execute as plan_execute;
pub use schema::execute as schema_execute;
pub use sizes::execute as sizes_execute;
