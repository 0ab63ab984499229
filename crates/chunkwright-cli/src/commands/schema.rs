//! Schema command implementation.

use std::io::{self, Write};

use chunkwright_config::ProjectConfig;

use crate::error::Result;

/// Print the JSON schema of the config file to stdout.
pub fn execute() -> Result<()> {
    let schema = schemars::schema_for!(ProjectConfig);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &schema)?;
    writeln!(out)?;
    Ok(())
}
