//! Row mutation command - builds the batch entry for one row.

use chrono::Utc;
use fieldpath::mutation::{Mutation, MutationOp, SingleRowMutation, timestamp_micros};

use crate::cli::MutateArgs;
use crate::output::{OutputFormat, print_table};

/// Split `FAMILY:COLUMN` into its parts
fn parse_column(arg: &str) -> Result<(&str, &str), String> {
    arg.split_once(':')
        .filter(|(family, column)| !family.is_empty() && !column.is_empty())
        .ok_or_else(|| format!("expected FAMILY:COLUMN, got '{arg}'"))
}

/// Split `FAMILY:COLUMN=VALUE` into its parts
fn parse_cell(arg: &str) -> Result<(&str, &str, &str), String> {
    let (column_arg, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected FAMILY:COLUMN=VALUE, got '{arg}'"))?;
    let (family, column) = parse_column(column_arg)?;
    Ok((family, column, value))
}

/// Run the mutate command
pub fn run(args: &MutateArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let timestamp = args
        .timestamp
        .unwrap_or_else(|| timestamp_micros(Utc::now()));

    let mut row = SingleRowMutation::new(args.row.as_str());
    for arg in &args.set {
        let (family, column, value) = parse_cell(arg)?;
        row.push(Mutation::set_cell(family, column, timestamp, value));
    }
    for arg in &args.delete_column {
        let (family, column) = parse_column(arg)?;
        row.push(Mutation::delete_from_column_all(family, column));
    }
    for family in &args.delete_family {
        row.push(Mutation::delete_from_family(family.as_str()));
    }
    if args.delete_row {
        row.push(Mutation::delete_from_row());
    }

    if row.is_empty() {
        return Err("no mutations given; use --set, --delete-column, --delete-family or --delete-row".into());
    }

    tracing::debug!(row_key = %row.row_key(), mutations = row.len(), "Built row mutation");
    let entry = row.into_entry();

    match format {
        OutputFormat::Human => {
            println!("Row key:     {}", entry.row_key);
            println!("Mutations:   {}", entry.mutations.len());
            println!();
            let rows: Vec<Vec<String>> = entry.mutations.iter().map(describe).collect();
            print_table(&["KIND", "FAMILY", "COLUMN", "DETAIL"], &rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&entry)?),
    }

    Ok(())
}

/// One table row describing a mutation
fn describe(mutation: &Mutation) -> Vec<String> {
    let (family, column, detail) = match &mutation.op {
        MutationOp::SetCell {
            family_name,
            column_qualifier,
            timestamp_micros: ts,
            value,
        } => (
            family_name.clone(),
            column_qualifier.clone(),
            format!("@{ts} = {}", String::from_utf8_lossy(value)),
        ),
        MutationOp::DeleteFromColumn {
            family_name,
            column_qualifier,
            time_range,
        } => (
            family_name.clone(),
            column_qualifier.clone(),
            format!("[{}, {})", time_range.start_micros, time_range.end_micros),
        ),
        MutationOp::DeleteFromFamily { family_name } => {
            (family_name.clone(), String::new(), String::new())
        }
        MutationOp::DeleteFromRow => (String::new(), String::new(), String::new()),
    };
    vec![mutation.kind().to_string(), family, column, detail]
}
