//! Implementation of the `promptforge init` command.
//!
//! Writes a config file holding every default, including the full built-in
//! question catalog, as a starting point for customization.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{ForgeError, Result};
use crate::fs::atomic_write_file;
use std::path::Path;

const HEADER: &str = "\
# promptforge configuration.
#
# export_file_name: file the finished prompt is saved to (must end in .txt)
# event_log: optional NDJSON file that receives session events
# questions: asked in order; kinds are single_line_text, free_text,
#   single_choice, multiple_choice and exclusive_choice (choice kinds need options)
";

/// Execute the `promptforge init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    write_default_config(&args.path, args.force)?;
    println!("Wrote default config to {}", args.path.display());
    Ok(())
}

/// Write the default config to `path`, refusing to replace a file unless `force`.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ForgeError::UserError(format!(
            "'{}' already exists.\n\nUse `promptforge init --force` to overwrite it.",
            path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    atomic_write_file(path, &format!("{}\n{}", HEADER, yaml))
}
