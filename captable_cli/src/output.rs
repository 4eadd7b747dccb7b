use anyhow::Result;
use captable::{ScenarioOutcome, Snapshot};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ClassRow {
    #[tabled(rename = "Class")]
    #[serde(rename = "Class")]
    name: String,
    #[tabled(rename = "Priority")]
    #[serde(rename = "Priority")]
    priority: i32,
    #[tabled(rename = "Round")]
    #[serde(rename = "Round")]
    round: String,
    #[tabled(rename = "Shares")]
    #[serde(rename = "Shares")]
    shares: i64,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
    #[tabled(rename = "Ownership")]
    #[serde(rename = "Ownership")]
    ownership: String,
}

#[derive(Tabled, Serialize)]
struct HolderRow {
    #[tabled(rename = "Shareholder")]
    #[serde(rename = "Shareholder")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    holder_type: String,
    #[tabled(rename = "Shares")]
    #[serde(rename = "Shares")]
    shares: i64,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
    #[tabled(rename = "Ownership")]
    #[serde(rename = "Ownership")]
    ownership: String,
}

#[derive(Tabled, Serialize)]
struct DilutionRow {
    #[tabled(rename = "Shareholder")]
    #[serde(rename = "Shareholder")]
    name: String,
    #[tabled(rename = "Future Shares")]
    #[serde(rename = "Future Shares")]
    shares: i64,
    #[tabled(rename = "Current %")]
    #[serde(rename = "Current %")]
    current: String,
    #[tabled(rename = "Future %")]
    #[serde(rename = "Future %")]
    future: String,
    #[tabled(rename = "Change")]
    #[serde(rename = "Change")]
    change: String,
}

// -- Row builders --

fn build_class_rows(snapshot: &Snapshot) -> Vec<ClassRow> {
    snapshot
        .class_summary
        .iter()
        .map(|c| ClassRow {
            name: c.name.clone(),
            priority: c.priority,
            round: c.round.clone(),
            shares: c.total_shares,
            value: format_value(c.total_value),
            ownership: format_percent(c.percentage),
        })
        .collect()
}

fn build_holder_rows(snapshot: &Snapshot) -> Vec<HolderRow> {
    snapshot
        .shareholder_summary
        .iter()
        .map(|s| HolderRow {
            name: s.name.clone(),
            holder_type: s.holder_type.clone().unwrap_or_default(),
            shares: s.total_shares,
            value: format_value(s.total_value),
            ownership: format_percent(s.percentage),
        })
        .collect()
}

fn build_dilution_rows(outcome: &ScenarioOutcome) -> Vec<DilutionRow> {
    outcome
        .future
        .shareholder_summary
        .iter()
        .map(|s| DilutionRow {
            name: s.name.clone(),
            shares: s.total_shares,
            current: format_percent(s.current_percentage.unwrap_or(0.0)),
            future: format_percent(s.future_percentage.unwrap_or(0.0)),
            change: format_change(s.percentage_change.unwrap_or(0.0)),
        })
        .collect()
}

fn print_company_summary(snapshot: &Snapshot) {
    println!(
        "Total shares: {}  Total invested: {}  Latest price: ${}  Valuation: {}",
        snapshot.total_shares,
        format_value(snapshot.total_value),
        snapshot.latest_valuation_per_share,
        format_value(snapshot.company_valuation),
    );
}

// -- Table output --

pub fn print_snapshot_table(snapshot: &Snapshot) {
    print_company_summary(snapshot);
    println!("\nShare classes:");
    println!("{}", Table::new(build_class_rows(snapshot)));
    println!("\nShareholders:");
    println!("{}", Table::new(build_holder_rows(snapshot)));
}

pub fn print_scenario_table(outcome: &ScenarioOutcome) {
    println!("Current:");
    print_company_summary(&outcome.current);
    println!("\nFuture:");
    print_company_summary(&outcome.future);
    println!("\nDilution:");
    println!("{}", Table::new(build_dilution_rows(outcome)));
}

// -- Markdown output --

pub fn print_snapshot_markdown(snapshot: &Snapshot) {
    let mut classes = Table::new(build_class_rows(snapshot));
    classes.with(Style::markdown());
    let mut holders = Table::new(build_holder_rows(snapshot));
    holders.with(Style::markdown());
    print_company_summary(snapshot);
    println!("\n{}\n\n{}", classes, holders);
}

pub fn print_scenario_markdown(outcome: &ScenarioOutcome) {
    let mut table = Table::new(build_dilution_rows(outcome));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_snapshot_csv(snapshot: &Snapshot) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_holder_rows(snapshot) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_scenario_csv(outcome: &ScenarioOutcome) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_dilution_rows(outcome) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.2}", value)
    }
}

fn format_percent(pct: f64) -> String {
    format!("{:.2}%", pct)
}

fn format_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}
