//! Split a document into frontmatter and body.

use serde_json::{Map, Value};

use super::decode::decode_header;
use crate::error::{Result, frontmatter};

/// Opening and closing delimiter line
const DELIMITER: &str = "---";

/// Decoded header: string keys mapped to JSON-compatible values.
pub type Frontmatter = Map<String, Value>;

/// A document split into its decoded header and trimmed body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl ParsedDocument {
    /// Top-level header value for `key`, if present (including explicit nulls).
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.frontmatter.get(key)
    }
}

/// Strip one `---` line (LF or CRLF terminated) from the start of `content`.
fn strip_opening_delimiter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Split `content` into raw header text and untrimmed body text.
///
/// The header ends at the first line that is exactly `---` (optionally followed
/// by `\r`); that line may also be the last line of the input. Fails with
/// `MissingFrontmatter` when the opening line is absent or never closed.
pub fn split_frontmatter(content: &str) -> Result<(&str, &str)> {
    let rest = strip_opening_delimiter(content).ok_or_else(frontmatter::missing)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let bare = line.strip_suffix('\n').unwrap_or(line);
        let bare = bare.strip_suffix('\r').unwrap_or(bare);
        if bare == DELIMITER {
            return Ok((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(frontmatter::missing())
}

/// Parse a Markdown document with YAML frontmatter.
///
/// The body is trimmed of surrounding whitespace; everything in between is kept verbatim.
pub fn parse_frontmatter(content: &str) -> Result<ParsedDocument> {
    let (header, body) = split_frontmatter(content)?;
    Ok(ParsedDocument {
        frontmatter: decode_header(header)?,
        body: body.trim().to_string(),
    })
}
