//! Agent records
//!
//! Agent documents copy `description`, `mode`, `temperature`, `tools` and `color`
//! from their frontmatter as-is, rename `permissions` to `permission`, and use the
//! body as the agent prompt.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FromDocument, Records, load_records, present};
use crate::error::Result;
use crate::frontmatter::ParsedDocument;

/// How the host may use an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    Primary,
    Subagent,
    All,
}

impl AgentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentMode::Primary => "primary",
            AgentMode::Subagent => "subagent",
            AgentMode::All => "all",
        }
    }
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "primary" => Ok(AgentMode::Primary),
            "subagent" => Ok(AgentMode::Subagent),
            "all" => Ok(AgentMode::All),
            other => Err(format!("Unknown agent mode: {other}")),
        }
    }
}

/// Agent configuration registered with the host.
///
/// Every field except `prompt` holds the frontmatter value verbatim: `None` means the
/// key was absent from the document, `Some(Value::Null)` means it was written as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub description: Option<Value>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub mode: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub temperature: Option<Value>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub tools: Option<Value>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub permission: Option<Value>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub color: Option<Value>,
}

impl AgentRecord {
    pub fn description(&self) -> Option<&str> {
        self.description.as_ref()?.as_str()
    }

    /// Agent mode, if the frontmatter names one of the known modes.
    pub fn mode(&self) -> Option<AgentMode> {
        self.mode.as_ref()?.as_str()?.parse().ok()
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature.as_ref()?.as_f64()
    }

    /// Whether `tool` is switched on or off in the `tools` mapping.
    pub fn tool_enabled(&self, tool: &str) -> Option<bool> {
        self.tools.as_ref()?.get(tool)?.as_bool()
    }
}

impl FromDocument for AgentRecord {
    const KIND: &'static str = "agent";

    fn from_document(document: ParsedDocument) -> Self {
        let ParsedDocument {
            mut frontmatter,
            body,
        } = document;

        AgentRecord {
            description: frontmatter.remove("description"),
            mode: frontmatter.remove("mode"),
            prompt: (!body.is_empty()).then_some(body),
            temperature: frontmatter.remove("temperature"),
            tools: frontmatter.remove("tools"),
            permission: frontmatter.remove("permissions"),
            color: frontmatter.remove("color"),
        }
    }
}

/// Load all agent documents from `dir`, keyed by agent name.
pub fn load_agents(dir: impl AsRef<Path>) -> Result<Records<AgentRecord>> {
    load_records(dir.as_ref())
}
