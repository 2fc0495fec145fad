//! Command records
//!
//! A command's body becomes its template, wrapped in `<command-instruction>` tags.
//! Only `description`, `agent`, `model` and `subtask` are taken from the frontmatter.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FromDocument, Records, load_records, present};
use crate::error::Result;
use crate::frontmatter::ParsedDocument;

pub const TEMPLATE_OPEN_TAG: &str = "<command-instruction>";
pub const TEMPLATE_CLOSE_TAG: &str = "</command-instruction>";

/// Wrap a command body in the instruction envelope.
pub fn wrap_template(body: &str) -> String {
    format!("{TEMPLATE_OPEN_TAG}\n{body}\n{TEMPLATE_CLOSE_TAG}")
}

/// Command configuration registered with the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub template: String,

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
    pub agent: Option<Value>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub model: Option<Value>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub subtask: Option<Value>,
}

impl CommandRecord {
    pub fn description(&self) -> Option<&str> {
        self.description.as_ref()?.as_str()
    }

    pub fn agent(&self) -> Option<&str> {
        self.agent.as_ref()?.as_str()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_ref()?.as_str()
    }

    pub fn subtask(&self) -> Option<bool> {
        self.subtask.as_ref()?.as_bool()
    }
}

impl FromDocument for CommandRecord {
    const KIND: &'static str = "command";

    fn from_document(document: ParsedDocument) -> Self {
        let ParsedDocument {
            mut frontmatter,
            body,
        } = document;

        CommandRecord {
            template: wrap_template(&body),
            description: frontmatter.remove("description"),
            agent: frontmatter.remove("agent"),
            model: frontmatter.remove("model"),
            subtask: frontmatter.remove("subtask"),
        }
    }
}

/// Load all command documents from `dir`, keyed by command name.
pub fn load_commands(dir: impl AsRef<Path>) -> Result<Records<CommandRecord>> {
    load_records(dir.as_ref())
}
