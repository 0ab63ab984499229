//! Sizes command implementation.
//!
//! Scans a build output directory and reports emitted chunks larger than
//! the size warning limit.

use std::io::{self, Write};
use std::path::Path;

use chunkwright_chunks::ChunkSizeLimit;
use tracing::debug;
use walkdir::WalkDir;

use crate::cli::{GlobalArgs, SizesArgs};
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// File extensions bundlers emit as chunks.
const CHUNK_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "css"];

/// Execute the sizes command.
///
/// Oversized chunks are printed to stdout as `<path>\t<size>`. With
/// `--deny` any oversized chunk makes the command fail.
pub fn execute(args: SizesArgs, global: &GlobalArgs) -> Result<()> {
    let options = utils::load_build_options(global)?;
    let limit = args
        .limit
        .map(ChunkSizeLimit::new)
        .unwrap_or_else(|| options.chunk_size_limit());

    let dir = utils::resolve_path(&args.dir, &utils::project_dir(global)?);
    if !dir.is_dir() {
        return Err(CliError::FileNotFound(dir));
    }

    let chunks = collect_chunks(&dir)?;
    debug!(dir = %dir.display(), chunks = chunks.len(), "scanned output directory");

    let oversized = limit.report(chunks);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for chunk in &oversized {
        writeln!(out, "{}\t{}", chunk.name, ui::format_kb(chunk.size_bytes))?;
    }

    if oversized.is_empty() {
        ui::success(&format!(
            "All chunks are within the {} kB limit",
            limit.limit_kb()
        ));
        return Ok(());
    }

    ui::warning(&format!(
        "{} chunk(s) are larger than {} kB",
        oversized.len(),
        limit.limit_kb()
    ));
    if args.deny {
        return Err(CliError::OversizedChunks {
            count: oversized.len(),
            limit_kb: limit.limit_kb(),
        });
    }
    Ok(())
}

/// Emitted chunk files under `dir` as (relative path, size) pairs, sorted
/// by path.
fn collect_chunks(dir: &Path) -> Result<Vec<(String, u64)>> {
    let mut chunks = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_chunk_file(entry.path()) {
            continue;
        }
        let size = entry.metadata()?.len();
        let name = entry
            .path()
            .strip_prefix(dir)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        chunks.push((name, size));
    }
    Ok(chunks)
}

fn is_chunk_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CHUNK_EXTENSIONS.contains(&ext))
}
