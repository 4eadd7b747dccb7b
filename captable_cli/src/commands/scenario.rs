//! The `scenario` subcommand: dilution from one hypothetical issuance.

use std::path::PathBuf;

use anyhow::Result;
use captable::{compare_scenario, HypotheticalIssuance, Issuance, ShareClass, Shareholder};
use chrono::NaiveDate;
use clap::Args;

use crate::commands::load_json;
use crate::output::{
    print_json, print_scenario_csv, print_scenario_markdown, print_scenario_table, OutputFormat,
};

/// Arguments for the `scenario` subcommand.
#[derive(Args)]
pub struct ScenarioArgs {
    /// Path to the issuances JSON file
    #[arg(long)]
    pub issuances: PathBuf,

    /// Path to the shareholders JSON file
    #[arg(long)]
    pub shareholders: PathBuf,

    /// Path to the share classes JSON file
    #[arg(long)]
    pub share_classes: PathBuf,

    /// Shareholder receiving the hypothetical issuance
    #[arg(long)]
    pub shareholder_id: i64,

    /// Share class of the hypothetical issuance
    #[arg(long)]
    pub share_class_id: i64,

    /// Number of shares to issue
    #[arg(long)]
    pub shares: i64,

    /// Price per share of the new issuance
    #[arg(long)]
    pub price_per_share: f64,

    /// Issue date (YYYY-MM-DD)
    #[arg(long)]
    pub issue_date: NaiveDate,

    /// Round label (defaults to "Future Scenario")
    #[arg(long)]
    pub round: Option<String>,
}

pub fn run(args: &ScenarioArgs, format: &OutputFormat) -> Result<()> {
    let issuances: Vec<Issuance> = load_json(&args.issuances)?;
    let shareholders: Vec<Shareholder> = load_json(&args.shareholders)?;
    let share_classes: Vec<ShareClass> = load_json(&args.share_classes)?;

    let hypothetical = HypotheticalIssuance {
        shareholder_id: args.shareholder_id,
        share_class_id: args.share_class_id,
        shares: args.shares,
        price_per_share: args.price_per_share,
        issue_date: args.issue_date,
        round: args.round.clone(),
    };

    let outcome = compare_scenario(&issuances, &shareholders, &share_classes, &hypothetical)?;

    match format {
        OutputFormat::Json => print_json(&outcome),
        OutputFormat::Csv => print_scenario_csv(&outcome)?,
        OutputFormat::Markdown => print_scenario_markdown(&outcome),
        OutputFormat::Table => print_scenario_table(&outcome),
    }

    Ok(())
}
