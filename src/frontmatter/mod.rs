//! Frontmatter documents
//!
//! Splits a Markdown document into its YAML header (between a leading `---` line
//! and the next `---` line) and its body. The header is decoded with a restricted,
//! JSON-compatible subset of YAML: mappings, sequences, strings, booleans and
//! numbers. Anchors, aliases, custom tags, directives and document markers are rejected.

mod decode;
mod parser;

pub use decode::decode_header;
pub use parser::{Frontmatter, ParsedDocument, parse_frontmatter, split_frontmatter};
