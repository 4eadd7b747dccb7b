//! The `snapshot` subcommand: the current cap table from stored records.

use std::path::PathBuf;

use anyhow::Result;
use captable::{compute_snapshot, Issuance, ShareClass, Shareholder};
use clap::Args;

use crate::commands::load_json;
use crate::output::{
    print_json, print_snapshot_csv, print_snapshot_markdown, print_snapshot_table, OutputFormat,
};

/// Arguments for the `snapshot` subcommand.
#[derive(Args)]
pub struct SnapshotArgs {
    /// Path to the issuances JSON file
    #[arg(long)]
    pub issuances: PathBuf,

    /// Path to the shareholders JSON file
    #[arg(long)]
    pub shareholders: PathBuf,

    /// Path to the share classes JSON file
    #[arg(long)]
    pub share_classes: PathBuf,
}

pub fn run(args: &SnapshotArgs, format: &OutputFormat) -> Result<()> {
    let issuances: Vec<Issuance> = load_json(&args.issuances)?;
    let shareholders: Vec<Shareholder> = load_json(&args.shareholders)?;
    let share_classes: Vec<ShareClass> = load_json(&args.share_classes)?;

    let snapshot = compute_snapshot(&issuances, &shareholders, &share_classes)?;

    match format {
        OutputFormat::Json => print_json(&snapshot),
        OutputFormat::Csv => print_snapshot_csv(&snapshot)?,
        OutputFormat::Markdown => print_snapshot_markdown(&snapshot),
        OutputFormat::Table => print_snapshot_table(&snapshot),
    }

    Ok(())
}
