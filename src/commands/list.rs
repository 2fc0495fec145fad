//! Agents and commands listings
//!
//! These commands load `agent/` or `command/` of the plugin root and show each record
//! by name, the way registration would hand it to the host.

use std::path::PathBuf;

use console::Style;
use serde_json::Value;

use corvus::error::Result;
use corvus::{AgentRecord, CommandRecord, load_agents, load_commands};

use super::open_plugin;
use crate::cli::ListArgs;

/// Run agents command
pub fn run_agents(root: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let plugin = open_plugin(root)?;
    let dir = plugin.agent_dir();
    if !dir.exists() {
        println!("No agents found in {}.", dir.display());
        return Ok(());
    }

    let agents = load_agents(&dir)?;
    if agents.is_empty() {
        println!("No agents found in {}.", dir.display());
        return Ok(());
    }

    println!("Agents ({}):", agents.len());
    println!();
    for (name, agent) in &agents {
        display_agent(name, agent, args.detailed);
        println!();
    }

    Ok(())
}

/// Run commands command
pub fn run_commands(root: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let plugin = open_plugin(root)?;
    let dir = plugin.command_dir();
    if !dir.exists() {
        println!("No commands found in {}.", dir.display());
        return Ok(());
    }

    let commands = load_commands(&dir)?;
    if commands.is_empty() {
        println!("No commands found in {}.", dir.display());
        return Ok(());
    }

    println!("Commands ({}):", commands.len());
    println!();
    for (name, command) in &commands {
        display_command(name, command, args.detailed);
        println!();
    }

    Ok(())
}

fn display_agent(name: &str, agent: &AgentRecord, detailed: bool) {
    println!("  {}", Style::new().bold().yellow().apply_to(name));
    if let Some(mode) = &agent.mode {
        display_field("Mode:", &value_text(mode));
    }
    if let Some(description) = &agent.description {
        display_field("Description:", &value_text(description));
    }

    if !detailed {
        return;
    }

    if let Some(temperature) = &agent.temperature {
        display_field("Temperature:", &value_text(temperature));
    }
    if let Some(color) = &agent.color {
        display_field("Color:", &value_text(color));
    }
    if let Some(Value::Object(tools)) = &agent.tools {
        let enabled: Vec<&str> = tools
            .iter()
            .filter(|(_, on)| on.as_bool() == Some(true))
            .map(|(tool, _)| tool.as_str())
            .collect();
        let disabled: Vec<&str> = tools
            .iter()
            .filter(|(_, on)| on.as_bool() == Some(false))
            .map(|(tool, _)| tool.as_str())
            .collect();
        if !enabled.is_empty() {
            display_field("Tools:", &enabled.join(", "));
        }
        if !disabled.is_empty() {
            display_field(
                "Disabled tools:",
                &Style::new().dim().apply_to(disabled.join(", ")).to_string(),
            );
        }
    }
    if let Some(permission) = &agent.permission {
        display_field("Permission:", &value_text(permission));
    }
    match &agent.prompt {
        Some(prompt) => {
            let lines = prompt.lines().count();
            let label = if lines == 1 { "line" } else { "lines" };
            display_field("Prompt:", &format!("{} {}", lines, label));
        }
        None => display_field("Prompt:", &Style::new().dim().apply_to("none").to_string()),
    }
}

fn display_command(name: &str, command: &CommandRecord, detailed: bool) {
    println!("  {}", Style::new().bold().yellow().apply_to(name));
    if let Some(agent) = &command.agent {
        display_field("Agent:", &value_text(agent));
    }
    if let Some(description) = &command.description {
        display_field("Description:", &value_text(description));
    }

    if !detailed {
        return;
    }

    if let Some(model) = &command.model {
        display_field("Model:", &value_text(model));
    }
    if let Some(subtask) = &command.subtask {
        display_field("Subtask:", &value_text(subtask));
    }
    println!("    {}", Style::new().bold().apply_to("Template:"));
    for line in command.template.lines() {
        println!("      {}", Style::new().dim().apply_to(line));
    }
}

fn display_field(label: &str, value: &str) {
    println!("    {} {}", Style::new().bold().apply_to(label), value);
}

/// Header values are shown as written: strings bare, everything else as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
