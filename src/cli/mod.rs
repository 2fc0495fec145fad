//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - register: Register command arguments
//! - list: Arguments shared by the agents and commands listings
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod register;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use register::RegisterArgs;

/// Corvus - agent, command and skill registration for AI coding hosts
///
/// Registers the agents, commands and skills of a plugin root into a host configuration.
#[derive(Parser, Debug)]
#[command(
    name = "corvus",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Register agents, commands and skills into an AI coding host configuration",
    long_about = "Corvus reads Markdown agent and command documents with YAML frontmatter from a \
                  plugin root, merges them into a host configuration together with the skill \
                  directory and the web-research MCP server, and prints the result.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  corvus register                          \x1b[90m# Register into an empty configuration\x1b[0m\n   \
                  corvus register --config opencode.json   \x1b[90m# Register into an existing configuration\x1b[0m\n   \
                  corvus -r ./plugin agents                \x1b[90m# List agents of another root\x1b[0m\n   \
                  corvus commands --detailed               \x1b[90m# Show command templates\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Plugin root directory (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "CORVUS_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register the plugin root into a host configuration and print it
    Register(RegisterArgs),

    /// List agents defined under agent/
    Agents(ListArgs),

    /// List commands defined under command/
    Commands(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
