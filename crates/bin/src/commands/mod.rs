//! Subcommand implementations.

pub mod mutate;
pub mod path;
