//! Error types for field path parsing and validation.
//!
//! Field paths model invalidity as a value state, so these errors never escape the
//! infallible constructors. They are reported by [`FieldPath::try_parse`] and
//! [`FieldPath::ensure_valid`] for callers that want to know why a path was rejected.
//!
//! [`FieldPath::try_parse`]: super::FieldPath::try_parse
//! [`FieldPath::ensure_valid`]: super::FieldPath::ensure_valid

use thiserror::Error;

/// Structured error types for field path operations.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldPathError {
    /// The input string was empty
    #[error("Field path string cannot be empty")]
    Empty,

    /// A delimiter was leading, trailing, or doubled
    #[error("Empty component at byte {position} in field path '{path}'")]
    EmptySegment { path: String, position: usize },

    /// A quoted component was never closed
    #[error("Unterminated quoted component in field path '{path}'")]
    UnterminatedQuote { path: String },

    /// A backtick appeared inside a bare component
    #[error("Unexpected backtick at byte {position} in field path '{path}'")]
    UnexpectedBacktick { path: String, position: usize },

    /// A backslash inside a quoted component did not escape a backslash or backtick
    #[error("Invalid escape sequence at byte {position} in field path '{path}'")]
    InvalidEscape { path: String, position: usize },

    /// A quoted component was followed by something other than a delimiter
    #[error("Expected '.' at byte {position} in field path '{path}'")]
    MissingDelimiter { path: String, position: usize },

    /// A component contains reserved characters
    #[error("Invalid characters in component '{component}'")]
    InvalidCharacters { component: String },

    /// The path was already invalid
    #[error("Field path is invalid")]
    InvalidPath,
}

impl FieldPathError {
    /// Check if this error was raised while splitting the path string
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            FieldPathError::Empty
                | FieldPathError::EmptySegment { .. }
                | FieldPathError::UnterminatedQuote { .. }
                | FieldPathError::UnexpectedBacktick { .. }
                | FieldPathError::InvalidEscape { .. }
                | FieldPathError::MissingDelimiter { .. }
        )
    }

    /// Check if this error was raised by component character validation
    pub fn is_character_error(&self) -> bool {
        matches!(self, FieldPathError::InvalidCharacters { .. })
    }

    /// Get the offending component if this is a component-level error
    pub fn component(&self) -> Option<&str> {
        match self {
            FieldPathError::InvalidCharacters { component } => Some(component),
            _ => None,
        }
    }
}

// Conversion from FieldPathError to the main Error type
impl From<FieldPathError> for crate::Error {
    fn from(err: FieldPathError) -> Self {
        crate::Error::FieldPath(err)
    }
}
