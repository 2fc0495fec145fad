//! Host configuration handling for Corvus
//!
//! This module contains data structures for:
//! - The host configuration object that registration mutates (`agent`, `command`,
//!   `skills.paths`, `mcp`), with every other host key carried through untouched
//! - MCP server descriptors
//! - Reading host configuration files written as JSON with comments

pub mod host;
pub mod jsonc;
pub mod mcp;

// Re-export commonly used types
pub use host::{HostConfig, SkillsConfig};
pub use jsonc::strip_jsonc_comments;
pub use mcp::{McpServer, WEB_RESEARCH_COMMAND, WEB_RESEARCH_SERVER};
