//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `chunkwright classify` - chunk name for each module id
//! - `chunkwright plan` - group a module list into chunks
//! - `chunkwright sizes` - warn about oversized output chunks
//! - `chunkwright check` - validate and summarize the configuration
//! - `chunkwright init` - write a starter chunkwright.toml
//! - `chunkwright schema` - print the config JSON schema

mod commands;

use clap::{Args, Parser};
use std::path::PathBuf;

pub use commands::{CheckArgs, ClassifyArgs, Command, InitArgs, PlanArgs, SizesArgs};

/// chunkwright - manual chunk policy for JavaScript bundles
#[derive(Parser, Debug)]
#[command(
    name = "chunkwright",
    version,
    about = "Manual chunk classification for JavaScript bundles",
    long_about = "chunkwright decides which output chunk each bundled module belongs to.\n\
                  It applies the project's manual chunk policy to module ids, groups\n\
                  module lists into chunk plans and checks emitted chunk sizes."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to load instead of discovering one
    ///
    /// Relative paths are resolved against --cwd.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Config profile to apply
    #[arg(short, long, global = true, value_name = "NAME")]
    pub profile: Option<String>,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_classify_with_global_flags() {
        let cli = Cli::try_parse_from([
            "chunkwright",
            "classify",
            "--profile",
            "debug",
            "/repo/node_modules/p5/lib/p5.js",
            "-v",
        ])
        .unwrap();
        assert!(cli.global.verbose);
        assert_eq!(cli.global.profile.as_deref(), Some("debug"));
        match cli.command {
            Command::Classify(args) => assert_eq!(args.ids.len(), 1),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["chunkwright", "-v", "-q", "schema"]);
        assert!(result.is_err());
    }

    #[test]
    fn classify_requires_an_id() {
        assert!(Cli::try_parse_from(["chunkwright", "classify"]).is_err());
    }
}
