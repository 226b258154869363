//!
//! fieldpath: client-side addressing for a remote document/row store.
//! This library provides the value types a client uses to name data before handing
//! it to a serializer and transport.
//!
//! ## Core Concepts
//!
//! * **Field paths (`field_path::FieldPath`)**: An ordered list of field names identifying a nested field in a document.
//!   Paths are parsed from dotted strings, composed, totally ordered, and rendered to the canonical API string.
//! * **Components (`field_path::component`)**: The character rules for one field name: reserved characters,
//!   backtick quoting, and delimiter-aware splitting.
//! * **Mutations (`mutation::Mutation`)**: A single set or delete edit targeting the cells of a row.
//! * **Row mutations (`mutation::SingleRowMutation`)**: The mutations applied atomically to one row,
//!   moved into a wire batch entry (`mutation::MutateRowsEntry`) when sent.

pub mod constants;
pub mod field_path;
pub mod mutation;

/// Re-export the `FieldPath` struct for easier access.
pub use field_path::FieldPath;

/// Result type used throughout the fieldpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the fieldpath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured field path errors from the field_path module
    #[error(transparent)]
    FieldPath(field_path::FieldPathError),

    /// Structured mutation errors from the mutation module
    #[error(transparent)]
    Mutation(mutation::MutationError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::FieldPath(_) => "field_path",
            Error::Mutation(_) => "mutation",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is field path related.
    pub fn is_field_path_error(&self) -> bool {
        matches!(self, Error::FieldPath(_))
    }

    /// Check if this error is mutation related.
    pub fn is_mutation_error(&self) -> bool {
        matches!(self, Error::Mutation(_))
    }

    /// Check if this error indicates malformed caller input.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::FieldPath(_) => true,
            Error::Mutation(mutation_err) => mutation_err.is_timestamp_error(),
            Error::Serialize(_) => false,
        }
    }
}
