//! Init command implementation.

use std::fs;

use chunkwright_config::discovery::CONFIG_FILE;

use crate::cli::{GlobalArgs, InitArgs};
use crate::commands::templates::CONFIG_TEMPLATE;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the init command.
///
/// Writes a starter config into the project directory. An existing file is
/// only replaced with `--force`.
pub fn execute(args: InitArgs, global: &GlobalArgs) -> Result<()> {
    let path = utils::project_dir(global)?.join(CONFIG_FILE);

    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    fs::write(&path, CONFIG_TEMPLATE)?;
    ui::success(&format!("Created {}", path.display()));
    Ok(())
}
