//! MCP server descriptors

use serde::{Deserialize, Serialize};

/// MCP server key that registration always owns
pub const WEB_RESEARCH_SERVER: &str = "web-research";
pub const WEB_RESEARCH_COMMAND: [&str; 3] = ["npx", "-y", "web-research-mcp"];

/// How the host launches an MCP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServer {
    #[serde(rename = "type")]
    pub kind: String,
    pub command: Vec<String>,
    pub enabled: bool,
}

impl McpServer {
    /// An enabled server started locally from `command` (program followed by its arguments).
    pub fn local<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: "local".to_string(),
            command: command.into_iter().map(Into::into).collect(),
            enabled: true,
        }
    }

    /// Descriptor registered under [`WEB_RESEARCH_SERVER`].
    pub fn web_research() -> Self {
        Self::local(WEB_RESEARCH_COMMAND)
    }
}
