//! Error types for path expression parsing.

use std::fmt;

/// Errors that can occur while tokenizing a path expression.
///
/// These are diagnostics for callers that parse paths directly; the
/// [`resolve`](super::resolve) convenience folds every parse failure into a
/// not-found result, since a malformed path cannot match anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path string was empty.
    EmptyPath,
    /// Bracket contents were not a non-negative integer.
    InvalidIndex { position: usize, text: String },
    /// A `[` with no matching `]`.
    UnclosedBracket { position: usize },
    /// A character that cannot follow a completed segment.
    UnexpectedToken { position: usize, found: char },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::EmptyPath => write!(f, "Empty path expression"),
            PathError::InvalidIndex { position, text } => {
                write!(f, "Invalid array index '{}' at position {}", text, position)
            }
            PathError::UnclosedBracket { position } => {
                write!(f, "Unclosed '[' at position {}", position)
            }
            PathError::UnexpectedToken { position, found } => {
                write!(f, "Unexpected character '{}' at position {}", found, position)
            }
        }
    }
}

impl std::error::Error for PathError {}
