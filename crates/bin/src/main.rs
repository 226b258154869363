use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("fieldpath=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from(cli.format);

    match &cli.command {
        Commands::Parse(args) => commands::path::parse(args, format),
        Commands::Join(args) => commands::path::join(args, format),
        Commands::Sort(args) => commands::path::sort(args, format),
        Commands::Mutate(args) => commands::mutate::run(args, format),
    }
}
