mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "captable")]
#[command(about = "Compute cap-table snapshots and model dilution scenarios")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the current equity snapshot
    Snapshot(commands::snapshot::SnapshotArgs),
    /// Compare the current cap table against a hypothetical future issuance
    Scenario(commands::scenario::ScenarioArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("captable=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    match &cli.command {
        Commands::Snapshot(args) => commands::snapshot::run(args, &format)?,
        Commands::Scenario(args) => commands::scenario::run(args, &format)?,
    }

    Ok(())
}
