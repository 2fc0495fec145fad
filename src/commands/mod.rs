//! Command implementations for Corvus CLI

pub mod completions;
pub mod list;
pub mod register;
pub mod version;

use std::path::PathBuf;

use corvus::Plugin;
use corvus::error::{Result, fs};

/// Plugin for the `--root` argument, or the current directory if none was given.
pub fn open_plugin(root: Option<PathBuf>) -> Result<Plugin> {
    let root = match root {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| fs::io_error(format!("Failed to get current directory: {}", e)))?,
    };
    Plugin::new(root)
}
