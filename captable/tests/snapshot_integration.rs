//! End-to-end: deserialize fixture rows, compute, and check the wire shape.

use captable::{
    compare_scenario, compute_snapshot, HypotheticalIssuance, Issuance, ShareClass, Shareholder,
};
use chrono::NaiveDate;

fn load_company() -> (Vec<Issuance>, Vec<Shareholder>, Vec<ShareClass>) {
    let issuances: Vec<Issuance> = serde_json::from_str(include_str!("fixtures/issuances.json"))
        .unwrap();
    let shareholders: Vec<Shareholder> =
        serde_json::from_str(include_str!("fixtures/shareholders.json")).unwrap();
    let share_classes: Vec<ShareClass> =
        serde_json::from_str(include_str!("fixtures/share_classes.json")).unwrap();
    (issuances, shareholders, share_classes)
}

#[test]
fn fixture_snapshot_totals() {
    let (issuances, shareholders, share_classes) = load_company();
    let snapshot = compute_snapshot(&issuances, &shareholders, &share_classes).unwrap();

    assert_eq!(snapshot.total_shares, 1_400_000);
    assert!((snapshot.total_value - 626_000.0).abs() < 1e-6);
    // Two issuances share 2024-03-01; the 16:30 row wins the tie.
    assert!((snapshot.latest_valuation_per_share - 2.5).abs() < 1e-12);
    assert!((snapshot.company_valuation - 3_500_000.0).abs() < 1e-6);
}

#[test]
fn fixture_snapshot_class_summary() {
    let (issuances, shareholders, share_classes) = load_company();
    let snapshot = compute_snapshot(&issuances, &shareholders, &share_classes).unwrap();

    // Class 300 has no ShareClass record: excluded from the summary while
    // its 100,000 shares still count in the totals above.
    assert_eq!(snapshot.class_summary.len(), 2);

    // Priority ascending: Preferred A (1) before Ordinary (2).
    let preferred = &snapshot.class_summary[0];
    assert_eq!(preferred.name, "Preferred A");
    assert_eq!(preferred.total_shares, 300_000);
    assert!((preferred.total_value - 625_000.0).abs() < 1e-6);
    // Round label comes from the class's first issuance in input order,
    // which carried a numeric round.
    assert_eq!(preferred.round, "1");

    let ordinary = &snapshot.class_summary[1];
    assert_eq!(ordinary.name, "Ordinary");
    assert_eq!(ordinary.total_shares, 1_000_000);

    let pct_sum: f64 = snapshot.class_summary.iter().map(|c| c.percentage).sum();
    // 100,000 unresolved shares keep the resolvable classes below 100%.
    assert!(pct_sum < 100.0);
    assert!((pct_sum - (1_300_000.0 / 1_400_000.0 * 100.0)).abs() < 1e-9);
}

#[test]
fn fixture_snapshot_shareholder_summary() {
    let (issuances, shareholders, share_classes) = load_company();
    let snapshot = compute_snapshot(&issuances, &shareholders, &share_classes).unwrap();

    assert_eq!(snapshot.shareholder_summary.len(), 3);

    // Descending by shares held.
    let names: Vec<&str> = snapshot
        .shareholder_summary
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Amira Hale", "Northway Ventures", "Option Pool Trust"]
    );

    let northway = &snapshot.shareholder_summary[1];
    assert_eq!(northway.total_shares, 300_000);
    assert_eq!(northway.holdings.len(), 2);
    assert_eq!(northway.holdings[0].id, 2);
    assert_eq!(northway.holdings[0].share_class_name, "Preferred A");

    // The pool's issuance points at the unknown class 300.
    let pool = &snapshot.shareholder_summary[2];
    assert_eq!(pool.holdings[0].share_class_name, "Unknown");
    assert!((pool.total_value - 0.0).abs() < 1e-12);
}

#[test]
fn snapshot_serializes_camel_case_without_scenario_fields() {
    let (issuances, shareholders, share_classes) = load_company();
    let snapshot = compute_snapshot(&issuances, &shareholders, &share_classes).unwrap();
    let value = serde_json::to_value(&snapshot).unwrap();

    assert!(value.get("totalShares").is_some());
    assert!(value.get("totalValue").is_some());
    assert!(value.get("latestValuationPerShare").is_some());
    assert!(value.get("companyValuation").is_some());

    let holder = &value["shareholderSummary"][0];
    assert!(holder.get("totalShares").is_some());
    assert!(holder.get("type").is_some());
    // Scenario-only fields are omitted from a plain snapshot.
    assert!(holder.get("currentPercentage").is_none());
    assert!(holder.get("futurePercentage").is_none());
    assert!(holder.get("percentageChange").is_none());

    let holding = &holder["holdings"][0];
    assert!(holding.get("pricePerShare").is_some());
    assert!(holding.get("shareClassName").is_some());
}

#[test]
fn fixture_scenario_round_trip() {
    let (issuances, shareholders, share_classes) = load_company();
    let before = issuances.clone();

    let hypothetical = HypotheticalIssuance {
        shareholder_id: 20,
        share_class_id: 200,
        shares: 600_000,
        price_per_share: 3.0,
        issue_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        round: Some("Series A".to_string()),
    };
    let outcome =
        compare_scenario(&issuances, &shareholders, &share_classes, &hypothetical).unwrap();

    assert_eq!(issuances, before);
    assert_eq!(outcome.current.total_shares, 1_400_000);
    assert_eq!(outcome.future.total_shares, 2_000_000);
    assert!((outcome.future.latest_valuation_per_share - 3.0).abs() < 1e-12);

    let northway = outcome
        .future
        .shareholder_summary
        .iter()
        .find(|s| s.id == 20)
        .unwrap();
    // 300,000 / 1,400,000 -> 21.43%; 900,000 / 2,000,000 -> 45%.
    assert_eq!(northway.current_percentage, Some(21.43));
    assert_eq!(northway.future_percentage, Some(45.0));
    assert_eq!(northway.percentage_change, Some(23.57));

    let value = serde_json::to_value(&outcome).unwrap();
    assert!(value.get("currentState").is_some());
    assert!(value.get("futureState").is_some());
    assert!(
        value["futureState"]["shareholderSummary"][0]
            .get("currentPercentage")
            .is_some()
    );
}
