//! Mutation integration tests
//!
//! Tests for the mutation factories and for handing a SingleRowMutation off to a
//! wire batch entry.

mod batch;
mod factories;
