//! Decode frontmatter text with the JSON-compatible subset of YAML.

use std::fmt;

use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

use super::parser::Frontmatter;
use crate::error::{Result, frontmatter};

/// YAML features outside the supported subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unsupported {
    Directive,
    DocumentMarker,
    Anchor,
    Alias,
    Tag,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unsupported::Directive => "directives",
            Unsupported::DocumentMarker => "document markers",
            Unsupported::Anchor => "anchors",
            Unsupported::Alias => "aliases",
            Unsupported::Tag => "custom tags",
        };
        f.write_str(name)
    }
}

/// Decode header text into a mapping.
///
/// Empty (or comment-only) headers decode to an empty mapping. Anything that is not a
/// mapping at the top level, or that uses anchors, aliases, tags, directives or
/// document markers, is a `MalformedHeader`.
pub fn decode_header(text: &str) -> Result<Frontmatter> {
    reject_unsupported_syntax(text)?;

    if text.trim().is_empty() {
        return Ok(Map::new());
    }

    let value: YamlValue =
        serde_yaml::from_str(text).map_err(|e| frontmatter::malformed(e.to_string()))?;

    match to_json(value)? {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map),
        other => Err(frontmatter::malformed(format!(
            "frontmatter must be a mapping, found {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

fn to_json(value: YamlValue) -> Result<Value> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => number_to_json(&n)?,
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(key_to_string(key)?, to_json(value)?);
            }
            Value::Object(map)
        }
        YamlValue::Tagged(tagged) => {
            return Err(frontmatter::malformed(format!(
                "{} are not supported (found {})",
                Unsupported::Tag,
                tagged.tag
            )));
        }
    })
}

fn number_to_json(n: &serde_yaml::Number) -> Result<Value> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Value::from(u));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| frontmatter::malformed(format!("number {n} has no JSON representation")))
}

fn key_to_string(key: YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        _ => Err(frontmatter::malformed("mapping keys must be scalars")),
    }
}

/// Line-oriented scan for syntax the decoder must not silently accept.
///
/// `serde_yaml` resolves anchors and aliases transparently, so they are caught here,
/// before decoding. Block scalar contents, quoted text and the continuation lines of
/// multi-line plain scalars are skipped.
fn reject_unsupported_syntax(text: &str) -> Result<()> {
    let mut scanner = SyntaxScanner::default();
    for (index, line) in text.lines().enumerate() {
        scanner.scan_line(line).map_err(|feature| {
            frontmatter::malformed(format!("{feature} are not supported (line {})", index + 1))
        })?;
    }
    Ok(())
}

#[derive(Default)]
struct SyntaxScanner {
    /// Indentation of the line that opened a block scalar (`|` or `>`)
    block_indent: Option<usize>,
    /// Quote character of a quoted scalar continuing onto the next line
    quote: Option<char>,
    flow_depth: usize,
    /// Column of the collection owning a plain scalar that may continue onto the next
    /// line; continuation lines are indented past it
    plain_owner: Option<usize>,
    /// Column of the collection owning a value that starts on the next line
    value_owner: Option<usize>,
}

fn ends_token(next: Option<char>) -> bool {
    matches!(next, None | Some(' ' | '\t'))
}

impl SyntaxScanner {
    fn scan_line(&mut self, line: &str) -> std::result::Result<(), Unsupported> {
        let content = line.trim_start_matches(' ');
        let indent = line.len() - content.len();

        if let Some(block) = self.block_indent {
            if content.trim().is_empty() || indent > block {
                return Ok(());
            }
            self.block_indent = None;
        }

        if content.trim().is_empty() {
            return Ok(());
        }
        if self.quote.is_none() && content.starts_with('#') {
            self.plain_owner = None;
            return Ok(());
        }

        let continues_plain = self.quote.is_none()
            && self
                .plain_owner
                .is_some_and(|owner| self.flow_depth > 0 || indent > owner);

        if self.quote.is_none() && self.flow_depth == 0 && !continues_plain {
            if line.starts_with('%') {
                return Err(Unsupported::Directive);
            }
            let is_marker = |marker: &str| {
                line.strip_prefix(marker)
                    .is_some_and(|rest| ends_token(rest.chars().next()))
            };
            if is_marker("---") || is_marker("...") {
                return Err(Unsupported::DocumentMarker);
            }
        }

        let owner = if continues_plain {
            self.plain_owner
        } else {
            self.value_owner
        };
        self.plain_owner = None;
        self.value_owner = None;

        self.scan_content(content, indent, continues_plain, owner.unwrap_or(indent))
    }

    fn scan_content(
        &mut self,
        content: &str,
        indent: usize,
        continues_plain: bool,
        mut owner: usize,
    ) -> std::result::Result<(), Unsupported> {
        let mut chars = content.char_indices().peekable();
        let mut node_start = self.quote.is_none() && !continues_plain;
        let mut plain = continues_plain;
        let mut node_col = indent;
        let mut after_space = true;

        while let Some((offset, c)) = chars.next() {
            let next = chars.peek().map(|&(_, next)| next);

            if let Some(quote) = self.quote {
                match c {
                    '\\' if quote == '"' => {
                        chars.next();
                    }
                    '\'' if quote == '\'' && next == Some('\'') => {
                        chars.next();
                    }
                    c if c == quote => self.quote = None,
                    _ => {}
                }
                node_start = false;
                after_space = false;
                continue;
            }

            if c == ' ' || c == '\t' {
                after_space = true;
                continue;
            }
            if c == '#' && after_space {
                plain = false;
                break;
            }
            after_space = false;

            if node_start {
                let col = indent + offset;
                if matches!(c, '-' | '?') && ends_token(next) {
                    owner = col;
                    continue;
                }
                node_col = col;
                match c {
                    '&' => return Err(Unsupported::Anchor),
                    '*' => return Err(Unsupported::Alias),
                    '!' => return Err(Unsupported::Tag),
                    '|' | '>' => {
                        if self.flow_depth == 0 {
                            self.block_indent = Some(indent);
                        }
                        node_start = false;
                        break;
                    }
                    '"' | '\'' => {
                        self.quote = Some(c);
                        node_start = false;
                        continue;
                    }
                    '[' | '{' => {
                        self.flow_depth += 1;
                        continue;
                    }
                    _ => plain = true,
                }
            }

            node_start = match c {
                ':' => {
                    let indicator = ends_token(next)
                        || (self.flow_depth > 0 && matches!(next, Some(',' | ']' | '}')));
                    if indicator {
                        plain = false;
                        if self.flow_depth == 0 {
                            owner = node_col;
                        }
                    }
                    indicator
                }
                ',' if self.flow_depth > 0 => {
                    plain = false;
                    true
                }
                ']' | '}' if self.flow_depth > 0 => {
                    self.flow_depth -= 1;
                    plain = false;
                    false
                }
                _ => false,
            };
        }

        if plain {
            self.plain_owner = Some(owner);
        } else if node_start && self.flow_depth == 0 && self.quote.is_none() {
            self.value_owner = Some(owner);
        }
        Ok(())
    }
}
