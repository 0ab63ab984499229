//! Plan command implementation.
//!
//! Reads resolved module ids (one per line) and prints the chunk plan as
//! JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use chunkwright_chunks::ChunkPlan;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::cli::{GlobalArgs, PlanArgs};
use crate::commands::utils;
use crate::error::{Result, ResultExt};

#[derive(Debug, Serialize)]
struct PlanOutput<'a> {
    chunks: IndexMap<&'a str, &'a [String]>,
    unassigned: &'a [String],
}

impl<'a> From<&'a ChunkPlan> for PlanOutput<'a> {
    fn from(plan: &'a ChunkPlan) -> Self {
        Self {
            chunks: plan.buckets().collect(),
            unassigned: plan.unassigned(),
        }
    }
}

/// Execute the plan command.
pub fn execute(args: PlanArgs, global: &GlobalArgs) -> Result<()> {
    let options = utils::load_build_options(global)?;
    let classifier = utils::classifier(&options)?;

    let input = match &args.input {
        Some(path) if path != Path::new("-") => {
            let path = utils::resolve_path(path, &utils::project_dir(global)?);
            fs::read_to_string(&path).with_path(&path)?
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let ids = parse_ids(&input);
    debug!(modules = ids.len(), "read module ids");

    let plan = ChunkPlan::build(&*classifier, &ids);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &PlanOutput::from(&plan))?;
    writeln!(out)?;

    Ok(())
}

/// Non-blank lines, trimmed.
fn parse_ids(input: &str) -> Vec<&str> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunkwright_chunks::manual_chunks;

    #[test]
    fn parse_ids_skips_blank_lines() {
        let ids = parse_ids("a.js\n\n  b.js  \r\n\t\nc.js");
        assert_eq!(ids, ["a.js", "b.js", "c.js"]);
    }

    #[test]
    fn plan_output_keeps_first_seen_order() {
        let plan = ChunkPlan::build(
            &manual_chunks,
            &[
                "/repo/node_modules/lodash/lodash.js",
                "/repo/node_modules/p5/lib/p5.js",
                "/repo/src/main.ts",
            ],
        );
        let json = serde_json::to_string(&PlanOutput::from(&plan)).unwrap();
        let vendor = json.find("\"vendor\"").unwrap();
        let p5 = json.find("\"p5\"").unwrap();
        assert!(vendor < p5, "{json}");
        assert!(
            json.ends_with(r#""unassigned":["/repo/src/main.ts"]}"#),
            "{json}"
        );
    }
}
