//! Frontmatter and document errors

use super::CorvusError;

/// Creates a missing frontmatter error
pub fn missing() -> CorvusError {
    CorvusError::MissingFrontmatter
}

/// Creates a malformed header error
pub fn malformed(reason: impl Into<String>) -> CorvusError {
    CorvusError::MalformedHeader {
        reason: reason.into(),
    }
}

/// Wraps a parse failure with the name of the file it came from
pub fn parse_failed(file: impl Into<String>, source: CorvusError) -> CorvusError {
    CorvusError::DocumentParseFailed {
        file: file.into(),
        source: Box::new(source),
    }
}
