//! CLI argument definitions for the fieldpath binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Aligned, human-readable text
    Human,
    /// One JSON document per command
    Json,
}

/// Parse, compose, and order document field paths and build row mutations
#[derive(Parser, Debug)]
#[command(name = "fieldpath")]
#[command(about = "fieldpath: field paths and row mutations for document/row stores")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "human", env = "FIELDPATH_FORMAT")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a field path and show its components and API representation
    Parse(ParseArgs),
    /// Append field paths left to right
    Join(JoinArgs),
    /// Sort and deduplicate field paths
    Sort(SortArgs),
    /// Build the batch entry for a single row mutation
    Mutate(MutateArgs),
}

/// Arguments for the parse command
#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    /// Dotted field path, components may be quoted with backticks
    pub path: String,
}

/// Arguments for the join command
#[derive(clap::Args, Debug)]
pub struct JoinArgs {
    /// Field paths to append, in order
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Arguments for the sort command
#[derive(clap::Args, Debug)]
pub struct SortArgs {
    /// Field paths to sort
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Keep duplicate paths
    #[arg(long)]
    pub keep_duplicates: bool,
}

/// Arguments for the mutate command
#[derive(clap::Args, Debug)]
pub struct MutateArgs {
    /// Row key the mutations apply to
    #[arg(short, long)]
    pub row: String,

    /// Set a cell, as FAMILY:COLUMN=VALUE
    #[arg(long = "set", value_name = "FAMILY:COLUMN=VALUE")]
    pub set: Vec<String>,

    /// Cell timestamp in microseconds for --set (defaults to now)
    #[arg(long)]
    pub timestamp: Option<i64>,

    /// Delete every value of a column, as FAMILY:COLUMN
    #[arg(long = "delete-column", value_name = "FAMILY:COLUMN")]
    pub delete_column: Vec<String>,

    /// Delete every cell in a column family
    #[arg(long = "delete-family", value_name = "FAMILY")]
    pub delete_family: Vec<String>,

    /// Delete the whole row
    #[arg(long)]
    pub delete_row: bool,
}
