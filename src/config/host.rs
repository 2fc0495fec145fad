//! Host configuration object
//!
//! The host owns this structure; registration only adds or replaces entries in the
//! `agent`, `command`, `skills.paths` and `mcp` sections. Keys Corvus does not know
//! about are kept in `other` and written back unchanged.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::jsonc::strip_jsonc_comments;
use crate::error::{Result, config};

/// Skill discovery settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<PathBuf>>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// The host application's configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl HostConfig {
    /// The `agent` section, created empty if absent.
    pub fn agents_mut(&mut self) -> &mut Map<String, Value> {
        self.agent.get_or_insert_with(Map::new)
    }

    /// The `command` section, created empty if absent.
    pub fn commands_mut(&mut self) -> &mut Map<String, Value> {
        self.command.get_or_insert_with(Map::new)
    }

    /// The `mcp` section, created empty if absent.
    pub fn mcp_mut(&mut self) -> &mut Map<String, Value> {
        self.mcp.get_or_insert_with(Map::new)
    }

    /// `skills.paths`, creating `skills` and/or `paths` if absent. Existing paths are kept.
    pub fn skill_paths_mut(&mut self) -> &mut Vec<PathBuf> {
        self.skills
            .get_or_insert_with(SkillsConfig::default)
            .paths
            .get_or_insert_with(Vec::new)
    }

    pub fn skill_paths(&self) -> &[PathBuf] {
        self.skills
            .as_ref()
            .and_then(|skills| skills.paths.as_deref())
            .unwrap_or_default()
    }

    /// Parse host configuration text. `origin` names the source in error messages.
    ///
    /// `//` and `/* */` comments are accepted; the top level must be a JSON object.
    pub fn from_json_str(content: &str, origin: &str) -> Result<Self> {
        let json = strip_jsonc_comments(content);
        let value: Value =
            serde_json::from_str(&json).map_err(|e| config::parse_failed(origin, e.to_string()))?;

        if !value.is_object() {
            return Err(config::invalid(format!(
                "{origin}: host configuration must be a JSON object"
            )));
        }

        serde_json::from_value(value).map_err(|e| config::parse_failed(origin, e.to_string()))
    }

    /// Read and parse a host configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(&origin, e.to_string()))?;
        Self::from_json_str(&content, &origin)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, write_document};
    use serde_json::json;

    #[test]
    fn test_sections_created_on_first_access() {
        let mut config = HostConfig::default();
        assert!(config.agent.is_none());

        config.agents_mut().insert("a".to_string(), json!({}));
        config.commands_mut();
        config.mcp_mut();

        assert_eq!(config.agent.as_ref().map(Map::len), Some(1));
        assert!(config.command.is_some());
        assert!(config.mcp.is_some());
    }

    #[test]
    fn test_existing_sections_are_reused() {
        let mut config: HostConfig = serde_json::from_value(json!({
            "agent": { "build": { "mode": "primary" } },
            "skills": { "paths": ["/existing"] }
        }))
        .expect("Should deserialize");

        config.agents_mut().insert("plan".to_string(), json!({}));
        config.skill_paths_mut().push(PathBuf::from("/new"));

        assert_eq!(config.agent.as_ref().map(Map::len), Some(2));
        assert_eq!(
            config.skill_paths(),
            [PathBuf::from("/existing"), PathBuf::from("/new")]
        );
    }

    #[test]
    fn test_skill_paths_created_when_skills_lacks_paths() {
        let mut config: HostConfig =
            serde_json::from_value(json!({ "skills": { "enabled": true } }))
                .expect("Should deserialize");

        config.skill_paths_mut().push(PathBuf::from("/skill"));

        let skills = config.skills.as_ref().expect("skills should exist");
        assert_eq!(skills.other.get("enabled"), Some(&json!(true)));
        assert_eq!(config.skill_paths(), [PathBuf::from("/skill")]);
    }

    #[test]
    fn test_skill_paths_empty_when_absent() {
        assert!(HostConfig::default().skill_paths().is_empty());
    }

    #[test]
    fn test_unknown_keys_round_trip() {
        let input = json!({
            "$schema": "https://opencode.ai/config.json",
            "plugin": ["corvus-ai"],
            "agent": {},
            "theme": { "name": "dark" }
        });
        let config: HostConfig = serde_json::from_value(input.clone()).expect("Should deserialize");
        assert_eq!(serde_json::to_value(&config).expect("Should serialize"), input);
    }

    #[test]
    fn test_absent_sections_are_not_serialized() {
        let value = serde_json::to_value(HostConfig::default()).expect("Should serialize");
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_from_json_str_accepts_comments() {
        let content = r#"{
  // installed plugins
  "plugin": ["corvus-ai"],
  /* registered by hand */
  "mcp": { "other": { "type": "local", "command": ["other"], "enabled": true } }
}"#;
        let config = HostConfig::from_json_str(content, "opencode.jsonc").expect("Should parse");
        assert_eq!(config.other.get("plugin"), Some(&json!(["corvus-ai"])));
        assert!(config.mcp.as_ref().is_some_and(|mcp| mcp.contains_key("other")));
    }

    #[test]
    fn test_from_json_str_rejects_non_objects() {
        let err = HostConfig::from_json_str("[1, 2]", "list.json").expect_err("should fail");
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn test_from_json_str_reports_syntax_errors() {
        let err = HostConfig::from_json_str("{ \"agent\": ", "broken.json").expect_err("should fail");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_from_json_str_rejects_wrong_section_types() {
        let err = HostConfig::from_json_str(r#"{ "agent": "nope" }"#, "bad.json")
            .expect_err("should fail");
        assert!(matches!(err, crate::error::CorvusError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_load_reads_file() {
        let temp = create_temp_dir();
        let path = write_document(temp.path(), "opencode.json", r#"{ "command": {} }"#);

        let config = HostConfig::load(&path).expect("Should load");

        assert_eq!(config.command, Some(Map::new()));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = create_temp_dir();
        let err = HostConfig::load(&temp.path().join("absent.json")).expect_err("should fail");
        assert!(matches!(err, crate::error::CorvusError::ConfigReadFailed { .. }));
    }
}
