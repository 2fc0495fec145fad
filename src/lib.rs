//! Corvus - agent, command and skill registration for AI coding hosts
//!
//! A Corvus plugin root is a directory with up to three subdirectories:
//! `agent/` and `command/` hold Markdown documents with a YAML frontmatter header,
//! `skill/` holds skills the host discovers on its own. Registration reads the
//! documents, projects them into host-facing records and merges them into the
//! host's configuration object, together with the skill directory and the
//! `web-research` MCP server.
//!
//! ```no_run
//! use corvus::{HostConfig, register};
//!
//! let mut config = HostConfig::default();
//! register("/path/to/plugin", &mut config)?;
//! println!("{}", config.to_json_pretty()?);
//! # Ok::<(), corvus::CorvusError>(())
//! ```

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod loader;
pub mod plugin;

#[cfg(test)]
mod test_fixtures;

pub use config::{HostConfig, McpServer, SkillsConfig};
pub use error::{CorvusError, Result};
pub use frontmatter::{Frontmatter, ParsedDocument, parse_frontmatter};
pub use loader::{AgentMode, AgentRecord, CommandRecord, Records, load_agents, load_commands};
pub use plugin::{Plugin, register};
