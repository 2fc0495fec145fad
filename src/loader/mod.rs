//! Record loaders
//!
//! A loader enumerates one directory (non-recursive), parses every `*.md` file in it
//! and projects each document into a record keyed by the file name without its
//! extension. Loading is all-or-nothing: the first file that cannot be read or parsed
//! aborts the whole directory, and the error names that file.

pub mod agent;
pub mod command;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, frontmatter, fs};
use crate::frontmatter::{ParsedDocument, parse_frontmatter};

pub use agent::{AgentMode, AgentRecord, load_agents};
pub use command::{CommandRecord, load_commands};

/// File name suffix of loadable documents
pub const DOCUMENT_EXTENSION: &str = ".md";

/// Records keyed by name
pub type Records<R> = BTreeMap<String, R>;

/// Projection from a parsed document into a host-facing record.
pub trait FromDocument: Sized {
    /// Record kind, used in log output
    const KIND: &'static str;

    fn from_document(document: ParsedDocument) -> Self;
}

/// Record name for a directory entry, or `None` if the entry is not a document.
///
/// A file called exactly `.md` keeps its full name.
pub fn record_name(file_name: &str) -> Option<&str> {
    match file_name.strip_suffix(DOCUMENT_EXTENSION)? {
        "" => Some(file_name),
        stem => Some(stem),
    }
}

/// Load every document in `dir` as a record of type `R`.
///
/// Entries are consumed in directory listing order; a later entry with the same
/// record name replaces an earlier one.
pub fn load_records<R: FromDocument>(dir: &Path) -> Result<Records<R>> {
    let dir_display = dir.display().to_string();
    let metadata =
        std::fs::metadata(dir).map_err(|e| fs::read_dir_failed(&dir_display, e.to_string()))?;
    if !metadata.is_dir() {
        return Err(fs::read_dir_failed(dir_display, "not a directory"));
    }

    let mut records = Records::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|e| fs::read_dir_failed(&dir_display, e.to_string()))?;
        let file_name = entry.file_name().to_string_lossy();
        let Some(name) = record_name(&file_name) else {
            continue;
        };

        if entry.file_type().is_dir() {
            warn!(path = %entry.path().display(), "skipping directory named like a document");
            continue;
        }

        let content = std::fs::read_to_string(entry.path())
            .map_err(|e| fs::read_failed(entry.path().display().to_string(), e.to_string()))?;
        let document = parse_frontmatter(&content)
            .map_err(|e| frontmatter::parse_failed(&*file_name, e))?;

        debug!(kind = R::KIND, name, "loaded document");
        records.insert(name.to_string(), R::from_document(document));
    }

    Ok(records)
}

/// Deserialize an optional field so that an explicit `null` stays `Some(Value::Null)`.
///
/// Paired with `#[serde(default)]`, a missing field is `None`.
pub(crate) fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
