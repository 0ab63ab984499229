//! chunkwright CLI entry point.
//!
//! Parses arguments, initializes logging and dispatches to the command.

use chunkwright_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.global.verbose, args.global.quiet, args.global.no_color);
    ui::init_colors(args.global.no_color);

    let result = match args.command {
        cli::Command::Classify(classify_args) => {
            commands::classify_execute(classify_args, &args.global)
        }
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args, &args.global),
        cli::Command::Sizes(sizes_args) => commands::sizes_execute(sizes_args, &args.global),
        cli::Command::Check(check_args) => commands::check_execute(check_args, &args.global),
        cli::Command::Init(init_args) => commands::init_execute(init_args, &args.global),
        cli::Command::Schema => commands::schema_execute(),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
