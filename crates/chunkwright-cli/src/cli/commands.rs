use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the chunk name for each module id
    ///
    /// Prints one `<id>\t<chunk>` line per id; `-` means the bundler keeps
    /// its default placement.
    Classify(ClassifyArgs),

    /// Group a list of module ids into chunks
    ///
    /// Reads newline-separated module ids and prints a JSON chunk plan.
    Plan(PlanArgs),

    /// Report output chunks above the size warning limit
    Sizes(SizesArgs),

    /// Validate the configuration and print a summary
    Check(CheckArgs),

    /// Write a starter chunkwright.toml
    Init(InitArgs),

    /// Print the JSON schema of chunkwright.toml
    Schema,
}

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Resolved module ids, e.g. /repo/node_modules/vue/dist/vue.js
    #[arg(required = true, value_name = "ID")]
    pub ids: Vec<String>,

    /// Print a JSON array instead of tab-separated lines
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// File with one module id per line (reads stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for the sizes command
#[derive(Args, Debug)]
pub struct SizesArgs {
    /// Build output directory to scan
    #[arg(default_value = "dist", value_name = "DIR")]
    pub dir: PathBuf,

    /// Override the configured warning limit (kB)
    #[arg(long, value_name = "KB")]
    pub limit: Option<u32>,

    /// Exit with an error when any chunk exceeds the limit
    #[arg(long)]
    pub deny: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Also print the resolved build options as JSON
    #[arg(long)]
    pub print: bool,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing chunkwright.toml
    #[arg(long)]
    pub force: bool,
}
