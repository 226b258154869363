//! Cell-level edits to a single row.
//!
//! A [`Mutation`] is one edit: set a cell, or delete cells from a column, a column
//! family, or the whole row. A [`SingleRowMutation`] collects the mutations to be
//! applied atomically to one row and hands them off to a batch as a
//! [`MutateRowsEntry`].
//!
//! # Timestamp ranges
//!
//! Column deletes take a half-open `[begin, end)` range in microseconds. A bound of
//! zero is unbounded on that side, so `[0, 0)` covers every timestamp while any
//! other empty range such as `[5, 5)` is rejected.
//!
//! ```rust
//! use fieldpath::mutation::{Mutation, SingleRowMutation};
//!
//! let mut row = SingleRowMutation::new("user#42");
//! row.push(Mutation::set_cell("profile", "name", 1_000, "Alice"))
//!     .push(Mutation::delete_from_column("profile", "nickname", 0, 2_000)?);
//!
//! let entry = row.into_entry();
//! assert_eq!(entry.row_key, "user#42");
//! assert_eq!(entry.mutations.len(), 2);
//! # Ok::<(), fieldpath::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::constants::{MICROS_PER_MILLI, UNBOUNDED_TIMESTAMP};

pub mod errors;

pub use errors::MutationError;

/// A half-open `[start_micros, end_micros)` timestamp range.
///
/// A zero end means the range extends to the newest timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimestampRange {
    pub start_micros: i64,
    pub end_micros: i64,
}

impl TimestampRange {
    /// Creates a range, rejecting empty, inverted, and negative ranges.
    ///
    /// # Errors
    /// Returns [`MutationError::InvalidTimestampRange`] unless
    /// `0 <= begin < end`, or `end` is zero (unbounded).
    pub fn new(begin: i64, end: i64) -> Result<Self, MutationError> {
        let reason = if begin < 0 || end < 0 {
            Some("timestamps cannot be negative")
        } else if end != UNBOUNDED_TIMESTAMP && begin >= end {
            Some("begin must be before end")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(MutationError::InvalidTimestampRange { begin, end, reason }),
            None => Ok(Self {
                start_micros: begin,
                end_micros: end,
            }),
        }
    }

    /// The range covering every timestamp.
    pub fn all() -> Self {
        Self::default()
    }

    /// Returns `true` if `timestamp_micros` falls inside the range.
    pub fn contains(&self, timestamp_micros: i64) -> bool {
        timestamp_micros >= self.start_micros
            && (self.end_micros == UNBOUNDED_TIMESTAMP || timestamp_micros < self.end_micros)
    }
}

/// The operation a [`Mutation`] performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOp {
    SetCell {
        family_name: String,
        column_qualifier: String,
        timestamp_micros: i64,
        #[serde(with = "serde_bytes")]
        value: Vec<u8>,
    },
    DeleteFromColumn {
        family_name: String,
        column_qualifier: String,
        time_range: TimestampRange,
    },
    DeleteFromFamily {
        family_name: String,
    },
    DeleteFromRow,
}

/// A single change to a row.
///
/// Mutations are created with the factory functions below and are otherwise
/// opaque to the batching layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mutation {
    pub op: MutationOp,
}

impl Mutation {
    /// Creates a mutation that sets a cell value at `timestamp_micros`.
    pub fn set_cell(
        family: impl Into<String>,
        column: impl Into<String>,
        timestamp_micros: i64,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            op: MutationOp::SetCell {
                family_name: family.into(),
                column_qualifier: column.into(),
                timestamp_micros,
                value: value.into(),
            },
        }
    }

    /// Creates a mutation deleting the cells of a column within `[begin, end)`.
    ///
    /// # Errors
    /// Returns [`MutationError::InvalidTimestampRange`] for an empty range other
    /// than `[0, 0)`, an inverted range, or negative bounds.
    pub fn delete_from_column(
        family: impl Into<String>,
        column: impl Into<String>,
        timestamp_begin: i64,
        timestamp_end: i64,
    ) -> Result<Self, MutationError> {
        let family = family.into();
        let column = column.into();
        let time_range = TimestampRange::new(timestamp_begin, timestamp_end).inspect_err(|err| {
            warn!(family = %family, column = %column, error = %err, "Rejected delete range");
        })?;

        Ok(Self {
            op: MutationOp::DeleteFromColumn {
                family_name: family,
                column_qualifier: column,
                time_range,
            },
        })
    }

    /// Creates a mutation deleting every value of a column.
    pub fn delete_from_column_all(family: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            op: MutationOp::DeleteFromColumn {
                family_name: family.into(),
                column_qualifier: column.into(),
                time_range: TimestampRange::all(),
            },
        }
    }

    /// Creates a mutation deleting the values of a column at or after `timestamp_begin`.
    ///
    /// # Errors
    /// Returns [`MutationError::InvalidTimestampRange`] if `timestamp_begin` is negative.
    pub fn delete_from_column_starting_from(
        family: impl Into<String>,
        column: impl Into<String>,
        timestamp_begin: i64,
    ) -> Result<Self, MutationError> {
        Self::delete_from_column(family, column, timestamp_begin, UNBOUNDED_TIMESTAMP)
    }

    /// Creates a mutation deleting the values of a column before `timestamp_end`.
    ///
    /// # Errors
    /// Returns [`MutationError::InvalidTimestampRange`] if `timestamp_end` is negative.
    pub fn delete_from_column_ending_at(
        family: impl Into<String>,
        column: impl Into<String>,
        timestamp_end: i64,
    ) -> Result<Self, MutationError> {
        Self::delete_from_column(family, column, UNBOUNDED_TIMESTAMP, timestamp_end)
    }

    /// Creates a mutation deleting every cell in a column family.
    pub fn delete_from_family(family: impl Into<String>) -> Self {
        Self {
            op: MutationOp::DeleteFromFamily {
                family_name: family.into(),
            },
        }
    }

    /// Creates a mutation deleting every cell in the row.
    pub fn delete_from_row() -> Self {
        Self {
            op: MutationOp::DeleteFromRow,
        }
    }

    /// Short name of the operation, for logs and listings.
    pub fn kind(&self) -> &'static str {
        match self.op {
            MutationOp::SetCell { .. } => "set_cell",
            MutationOp::DeleteFromColumn { .. } => "delete_from_column",
            MutationOp::DeleteFromFamily { .. } => "delete_from_family",
            MutationOp::DeleteFromRow => "delete_from_row",
        }
    }
}

/// Converts a wall-clock time to a cell timestamp.
///
/// Cell timestamps are microseconds since the epoch at millisecond granularity, so
/// sub-millisecond precision is truncated.
pub fn timestamp_micros(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis() * MICROS_PER_MILLI
}

/// A wire-level batch entry: one row key and the mutations to apply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutateRowsEntry {
    pub row_key: String,
    pub mutations: Vec<Mutation>,
}

/// Zero or more mutations to apply atomically to a single row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleRowMutation {
    row_key: String,
    ops: Vec<Mutation>,
}

impl SingleRowMutation {
    /// Creates an empty mutation for `row_key`.
    pub fn new(row_key: impl Into<String>) -> Self {
        Self {
            row_key: row_key.into(),
            ops: Vec::new(),
        }
    }

    /// Creates a row mutation from a list or iterator of mutations, kept in order.
    pub fn with_mutations(
        row_key: impl Into<String>,
        mutations: impl IntoIterator<Item = Mutation>,
    ) -> Self {
        Self {
            row_key: row_key.into(),
            ops: mutations.into_iter().collect(),
        }
    }

    /// Adds a mutation at the end.
    pub fn push(&mut self, mutation: Mutation) -> &mut Self {
        self.ops.push(mutation);
        self
    }

    /// Returns the row key.
    pub fn row_key(&self) -> &str {
        &self.row_key
    }

    /// Returns the mutations in the order they will be applied.
    pub fn mutations(&self) -> &[Mutation] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Moves the row key and mutations into `entry`, replacing its contents.
    ///
    /// Afterwards this row mutation has an empty key and no mutations, and can be
    /// reused.
    pub fn move_to(&mut self, entry: &mut MutateRowsEntry) {
        trace!(row_key = %self.row_key, mutations = self.ops.len(), "Moving row mutation into batch entry");
        entry.row_key = std::mem::take(&mut self.row_key);
        entry.mutations = std::mem::take(&mut self.ops);
    }

    /// Consumes the row mutation and returns it as a batch entry.
    pub fn into_entry(mut self) -> MutateRowsEntry {
        let mut entry = MutateRowsEntry::default();
        self.move_to(&mut entry);
        entry
    }
}

impl Extend<Mutation> for SingleRowMutation {
    fn extend<T: IntoIterator<Item = Mutation>>(&mut self, iter: T) {
        self.ops.extend(iter);
    }
}

impl From<MutateRowsEntry> for SingleRowMutation {
    fn from(entry: MutateRowsEntry) -> Self {
        Self {
            row_key: entry.row_key,
            ops: entry.mutations,
        }
    }
}
