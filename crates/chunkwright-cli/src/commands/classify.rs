//! Classify command implementation.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::{ClassifyArgs, GlobalArgs};
use crate::commands::utils;
use crate::error::Result;

/// Placeholder printed for modules left to the bundler.
const NO_CHUNK: &str = "-";

#[derive(Debug, Serialize)]
struct Classification<'a> {
    id: &'a str,
    chunk: Option<&'a str>,
}

/// Execute the classify command.
///
/// Prints one `<id>\t<chunk>` line per id in argument order, or a JSON
/// array of `{ "id", "chunk" }` objects with `--json`.
pub fn execute(args: ClassifyArgs, global: &GlobalArgs) -> Result<()> {
    let options = utils::load_build_options(global)?;
    let classifier = utils::classifier(&options)?;

    let results: Vec<Classification<'_>> = args
        .ids
        .iter()
        .map(|id| Classification {
            id,
            chunk: classifier.classify(id),
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &results)?;
        writeln!(out)?;
    } else {
        for result in &results {
            writeln!(out, "{}\t{}", result.id, result.chunk.unwrap_or(NO_CHUNK))?;
        }
    }

    Ok(())
}
