//! Check command implementation.
//!
//! Validates the configuration without classifying anything.

use std::io::{self, Write};

use chunkwright_config::BuildOptions;

use crate::cli::{CheckArgs, GlobalArgs};
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the discovered (or `--config`) file and apply `--profile`
/// 2. Validate option values
/// 3. Compile the manual chunk policy
///
/// With `--print` the resolved options are written to stdout as JSON.
pub fn execute(args: CheckArgs, global: &GlobalArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let options = utils::load_build_options(global)?;
    let policy = options.chunk_policy()?;

    ui::success("Configuration is valid!");
    print_summary(&options, policy.as_ref().map(|p| p.bucket_names()));

    if args.print {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &options)?;
        writeln!(out)?;
    }

    Ok(())
}

fn print_summary(options: &BuildOptions, buckets: Option<Vec<&str>>) {
    let plugins: Vec<&str> = options.plugins.iter().map(|p| p.as_str()).collect();
    ui::info(&format!("  plugins: {}", plugins.join(", ")));
    ui::info(&format!("  minify: {}", options.minify));
    ui::info(&format!("  target: {}", options.target));
    ui::info(&format!(
        "  chunk size warning limit: {} kB",
        options.chunk_size_warning_limit
    ));
    match buckets {
        Some(names) => ui::info(&format!("  manual chunks: {}", names.join(", "))),
        None => ui::warning("Manual chunks are disabled"),
    }
}
