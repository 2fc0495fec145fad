//! Error types and handling for Corvus
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`frontmatter`]: Document structure and header decoding errors
//! - [`fs`]: File system errors
//! - [`config`]: Host configuration errors

pub mod config;
pub mod frontmatter;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Corvus operations
#[derive(Error, Diagnostic, Debug)]
pub enum CorvusError {
    // Frontmatter errors
    #[error("No frontmatter found: file must start with a --- line and close with another")]
    #[diagnostic(
        code(corvus::frontmatter::missing),
        help("Start the document with a line containing only ---, then the YAML header, then another --- line")
    )]
    MissingFrontmatter,

    #[error("Malformed frontmatter: {reason}")]
    #[diagnostic(
        code(corvus::frontmatter::malformed),
        help("Frontmatter supports mappings, sequences, strings, booleans and numbers only")
    )]
    MalformedHeader { reason: String },

    #[error("Failed to parse {file}: {source}")]
    #[diagnostic(code(corvus::loader::parse_failed))]
    DocumentParseFailed {
        file: String,
        #[source]
        source: Box<CorvusError>,
    },

    // File system errors
    #[error("Failed to read directory: {path}: {reason}")]
    #[diagnostic(code(corvus::fs::read_dir_failed))]
    DirectoryReadFailed { path: String, reason: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(corvus::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(corvus::fs::io_error))]
    IoError { message: String },

    // Host configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(corvus::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(corvus::config::parse_failed),
        help("The host configuration must be a JSON object; // and /* */ comments are allowed")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(corvus::config::invalid))]
    ConfigInvalid { message: String },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(corvus::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    #[error("Serialization failed: {message}")]
    #[diagnostic(code(corvus::config::serialization_failed))]
    SerializationFailed { message: String },
}

impl CorvusError {
    /// True when the document (or the document a batch load failed on) has no frontmatter block.
    pub fn is_missing_frontmatter(&self) -> bool {
        match self {
            CorvusError::MissingFrontmatter => true,
            CorvusError::DocumentParseFailed { source, .. } => source.is_missing_frontmatter(),
            _ => false,
        }
    }

    /// True when the frontmatter block was found but could not be decoded.
    pub fn is_malformed_header(&self) -> bool {
        match self {
            CorvusError::MalformedHeader { .. } => true,
            CorvusError::DocumentParseFailed { source, .. } => source.is_malformed_header(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for CorvusError {
    fn from(err: serde_json::Error) -> Self {
        CorvusError::SerializationFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CorvusError>;
