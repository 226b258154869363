//! Error types for row mutation construction.

use thiserror::Error;

/// Structured error types for mutation factories.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MutationError {
    /// A delete range was empty, inverted, or negative
    #[error("Invalid timestamp range [{begin}, {end}): {reason}")]
    InvalidTimestampRange {
        begin: i64,
        end: i64,
        reason: &'static str,
    },
}

impl MutationError {
    /// Check if this error is about a timestamp range
    pub fn is_timestamp_error(&self) -> bool {
        matches!(self, MutationError::InvalidTimestampRange { .. })
    }
}

// Conversion from MutationError to the main Error type
impl From<MutationError> for crate::Error {
    fn from(err: MutationError) -> Self {
        crate::Error::Mutation(err)
    }
}
