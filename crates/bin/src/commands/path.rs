//! Field path commands - parse, join and sort dotted paths.

use fieldpath::FieldPath;

use crate::cli::{JoinArgs, ParseArgs, SortArgs};
use crate::output::{OutputFormat, print_table};

/// Run the parse command
pub fn parse(args: &ParseArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let result = FieldPath::try_parse(&args.path);

    match format {
        OutputFormat::Human => match &result {
            Ok(path) => {
                println!("Valid:       yes");
                println!("API repr:    {path}");
                println!("Components:  {}", path.len());
                println!();
                let rows: Vec<Vec<String>> = path
                    .components()
                    .enumerate()
                    .map(|(i, name)| vec![i.to_string(), name.to_string()])
                    .collect();
                print_table(&["#", "COMPONENT"], &rows);
            }
            Err(err) => {
                println!("Valid:       no");
                println!("Reason:      {err}");
            }
        },
        OutputFormat::Json => {
            let value = match &result {
                Ok(path) => serde_json::json!({
                    "valid": true,
                    "api_repr": path.to_api_repr(),
                    "components": path.components().collect::<Vec<_>>(),
                }),
                Err(err) => serde_json::json!({
                    "valid": false,
                    "error": err.to_string(),
                }),
            };
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}

/// Run the join command
pub fn join(args: &JoinArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let joined = args
        .paths
        .iter()
        .fold(FieldPath::default(), |path, suffix| path.append(suffix));

    if !joined.is_valid() {
        // Report the first argument that failed to parse
        for input in &args.paths {
            FieldPath::try_parse(input).map_err(fieldpath::Error::from)?;
        }
    }

    match format {
        OutputFormat::Human => println!("{joined}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(&joined)?),
    }

    Ok(())
}

/// Run the sort command
pub fn sort(args: &SortArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut paths: Vec<(FieldPath, &str)> = args
        .paths
        .iter()
        .map(|input| (FieldPath::parse(input), input.as_str()))
        .collect();

    let invalid = paths.iter().filter(|(path, _)| !path.is_valid()).count();
    if invalid > 0 {
        tracing::warn!(invalid, "Some inputs are not valid field paths and sort first");
    }

    // Stable, so duplicates keep the first input they were given as
    paths.sort_by(|(a, _), (b, _)| a.cmp(b));
    if !args.keep_duplicates {
        paths.dedup_by(|(a, _), (b, _)| a == b);
    }

    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = paths
                .iter()
                .map(|(path, input)| vec![path.to_string(), (*input).to_string()])
                .collect();
            print_table(&["PATH", "INPUT"], &rows);
        }
        OutputFormat::Json => {
            let value: Vec<serde_json::Value> = paths
                .iter()
                .map(|(path, input)| {
                    serde_json::json!({
                        "valid": path.is_valid(),
                        "api_repr": path.to_api_repr(),
                        "input": input,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
