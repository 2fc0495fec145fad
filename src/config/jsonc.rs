//! JSON with comments
//!
//! Host configuration files (for example `opencode.jsonc`) may contain `//` line
//! comments and `/* */` block comments. They are removed before handing the text to
//! `serde_json`; comment markers inside string literals are left alone.

/// Remove `//` and `/* */` comments outside of string literals.
///
/// Line comments keep their terminating newline so line numbers in later parse
/// errors still match the input.
pub fn strip_jsonc_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        result.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    if skipped == '\n' {
                        result.push('\n');
                    }
                    prev = skipped;
                }
            }
            ('"', _) => {
                in_string = true;
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}
