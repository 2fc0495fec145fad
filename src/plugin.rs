//! Plugin registration
//!
//! A plugin root holds three fixed directories:
//!
//! ```text
//! <root>/agent/*.md     -> config.agent[<name>]
//! <root>/command/*.md   -> config.command[<name>]
//! <root>/skill/         -> appended to config.skills.paths
//! ```
//!
//! Registration also force-sets the `web-research` MCP server. Missing directories are
//! skipped; a directory that exists but fails to load aborts registration.
//!
//! Registering twice leaves `agent`, `command` and `mcp` unchanged (entries are
//! replaced by key), but appends the skill directory to `skills.paths` again.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::{HostConfig, McpServer, WEB_RESEARCH_SERVER};
use crate::error::{Result, fs};
use crate::loader::{Records, load_agents, load_commands};

pub const AGENT_DIR: &str = "agent";
pub const COMMAND_DIR: &str = "command";
pub const SKILL_DIR: &str = "skill";

/// A plugin root and the registration hook that applies it to a host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    root: PathBuf,
}

impl Plugin {
    /// Create a plugin rooted at `root`, made absolute against the current directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = std::path::absolute(root).map_err(|e| {
            fs::io_error(format!(
                "Failed to resolve plugin root {}: {e}",
                root.display()
            ))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn agent_dir(&self) -> PathBuf {
        self.root.join(AGENT_DIR)
    }

    pub fn command_dir(&self) -> PathBuf {
        self.root.join(COMMAND_DIR)
    }

    pub fn skill_dir(&self) -> PathBuf {
        self.root.join(SKILL_DIR)
    }

    /// Register agents, commands, the skill directory and the web-research server
    /// into `config`.
    pub fn config(&self, config: &mut HostConfig) -> Result<()> {
        let agents = self.register_agents(config)?;
        let commands = self.register_commands(config)?;
        let skills = self.register_skills(config);
        register_web_research(config)?;

        info!(
            root = %self.root.display(),
            agents,
            commands,
            skills,
            "registered plugin resources"
        );
        Ok(())
    }

    fn register_agents(&self, config: &mut HostConfig) -> Result<usize> {
        let dir = self.agent_dir();
        if !dir.exists() {
            debug!(path = %dir.display(), "agent directory not found, skipping");
            return Ok(0);
        }
        let agents = load_agents(&dir)?;
        merge_records(config.agents_mut(), agents)
    }

    fn register_commands(&self, config: &mut HostConfig) -> Result<usize> {
        let dir = self.command_dir();
        if !dir.exists() {
            debug!(path = %dir.display(), "command directory not found, skipping");
            return Ok(0);
        }
        let commands = load_commands(&dir)?;
        merge_records(config.commands_mut(), commands)
    }

    fn register_skills(&self, config: &mut HostConfig) -> bool {
        let dir = self.skill_dir();
        if !dir.exists() {
            debug!(path = %dir.display(), "skill directory not found, skipping");
            return false;
        }
        config.skill_paths_mut().push(dir);
        true
    }
}

/// Register everything under `root` into `config`.
pub fn register(root: impl AsRef<Path>, config: &mut HostConfig) -> Result<()> {
    Plugin::new(root)?.config(config)
}

/// Insert every record by name, replacing existing entries wholesale.
fn merge_records<R: Serialize>(
    section: &mut Map<String, Value>,
    records: Records<R>,
) -> Result<usize> {
    let count = records.len();
    for (name, record) in records {
        section.insert(name, serde_json::to_value(record)?);
    }
    Ok(count)
}

fn register_web_research(config: &mut HostConfig) -> Result<()> {
    let server = serde_json::to_value(McpServer::web_research())?;
    config.mcp_mut().insert(WEB_RESEARCH_SERVER.to_string(), server);
    Ok(())
}
