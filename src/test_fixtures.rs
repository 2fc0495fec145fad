//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides sample documents and helper functions to create plugin
//! roots (with `agent/`, `command/` and `skill/` directories) with a single call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_plugin_root, create_temp_dir, write_document};
//!
//! #[test]
//! fn my_test() {
//!     // Empty temp directory
//!     let temp = create_temp_dir();
//!
//!     // One document in it
//!     write_document(temp.path(), "agent/helper.md", "---\nmode: all\n---\nHelp.");
//!
//!     // Full plugin root with sample agents, commands and a skill
//!     let root = create_plugin_root();
//! }
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Primary agent with tools, temperature and color
pub const CORVUS_AGENT: &str = r##"---
description: Orchestrates planning and delegates work to specialist subagents
mode: primary
temperature: 0.2
color: "#7c3aed"
tools:
  write: true
  edit: true
  webfetch: false
---

You are Corvus, a careful engineering lead.

Plan first, then delegate.
"##;

/// Subagent with a `permissions` block
pub const CODE_IMPLEMENTER_AGENT: &str = r#"---
description: Implements planned changes
mode: subagent
permissions:
  bash:
    "rm -rf *": deny
    "git push *": ask
---
Write the code described in the plan.
"#;

/// Command with every whitelisted field
pub const GIT_COMMIT_COMMAND: &str = r"---
description: Create a conventional commit from staged changes
agent: code-implementer
model: anthropic/claude-sonnet-4
subtask: false
---

Inspect the staged diff and write a commit message.
";

/// Command carrying agent-only fields that must be ignored
pub const SUMMARY_COMMAND: &str = r"---
description: Summarize the session
mode: subagent
temperature: 0.3
---
Summarize what happened so far.
";

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `content` to `relative_path` under `dir`, creating parent directories.
///
/// Returns the full path of the written file.
///
/// # Panics
///
/// Panics if the directory or file cannot be created.
pub fn write_document(dir: &Path, relative_path: &str, content: &str) -> PathBuf {
    let full_path = dir.join(relative_path);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&full_path, content).expect("Failed to write test file");
    full_path
}

/// Create a plugin root with two agents, two commands and one skill.
///
/// ```text
/// agent/corvus.md
/// agent/code-implementer.md
/// command/git-commit.md
/// command/summary.md
/// skill/web-search/SKILL.md
/// ```
///
/// # Panics
///
/// Panics if any file cannot be created.
#[must_use]
pub fn create_plugin_root() -> TempDir {
    let temp = create_temp_dir();
    let root = temp.path();
    write_document(root, "agent/corvus.md", CORVUS_AGENT);
    write_document(root, "agent/code-implementer.md", CODE_IMPLEMENTER_AGENT);
    write_document(root, "command/git-commit.md", GIT_COMMIT_COMMAND);
    write_document(root, "command/summary.md", SUMMARY_COMMAND);
    write_document(
        root,
        "skill/web-search/SKILL.md",
        "---\nname: web-search\ndescription: Search the web\n---\nUse the web-research server.\n",
    );
    temp
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_write_document_creates_parents() {
        let temp = create_temp_dir();
        let path = write_document(temp.path(), "a/b/c.md", "text");
        assert_eq!(std::fs::read_to_string(path).expect("Failed to read"), "text");
    }

    #[test]
    fn test_create_plugin_root() {
        let temp = create_plugin_root();
        for dir in ["agent", "command", "skill"] {
            assert!(temp.path().join(dir).is_dir(), "missing {dir}/");
        }
        assert!(temp.path().join("agent/corvus.md").is_file());
    }
}
