//! chunkwright CLI - manual chunk classification from the command line.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - one module per subcommand
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines on stderr
//!
//! Machine-readable output (classifications, plans, schemas) goes to
//! stdout. Logs and status lines go to stderr.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
