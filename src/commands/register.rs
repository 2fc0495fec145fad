//! Register command implementation
//!
//! Loads the host configuration (or starts from an empty one), runs registration once
//! and prints the result as pretty JSON.

use std::path::{Path, PathBuf};

use corvus::error::Result;
use corvus::{HostConfig, Plugin};

use super::open_plugin;
use crate::cli::RegisterArgs;

/// Run register command
pub fn run(root: Option<PathBuf>, args: RegisterArgs) -> Result<()> {
    let plugin = open_plugin(root)?;
    let config = registered_config(&plugin, args.config.as_deref())?;
    println!("{}", config.to_json_pretty()?);
    Ok(())
}

fn registered_config(plugin: &Plugin, config_path: Option<&Path>) -> Result<HostConfig> {
    let mut config = match config_path {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };
    plugin.config(&mut config)?;
    Ok(config)
}
