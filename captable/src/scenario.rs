//! The scenario comparator: current cap table vs. one hypothetical issuance.
//!
//! A thin composition over the snapshot calculator. It computes the baseline,
//! injects a synthetic issuance into a copy of the inputs, recomputes, and
//! attaches per-shareholder dilution percentages to the future snapshot.

use crate::errors::CapTableError;
use crate::snapshot::{compute_snapshot, percentage_of};
use crate::types::{
    HypotheticalIssuance, Issuance, ScenarioOutcome, ShareClass, Shareholder,
};
use crate::validation::validate_hypothetical;

/// Reserved id for the synthetic issuance injected by [`compare_scenario`].
/// Storage-assigned ids are positive, so this can never collide.
pub const SCENARIO_ISSUANCE_ID: i64 = -1;

/// Round label applied when the hypothetical issuance carries none.
pub const FUTURE_ROUND_LABEL: &str = "Future Scenario";

/// Scale for two-decimal rounding of the attached percentage fields.
const PERCENT_SCALE: f64 = 100.0;

/// Model a hypothetical future issuance against the current cap table.
///
/// The input collections are never mutated; the synthetic issuance is
/// appended to a copy. Every shareholder entry in the returned future
/// snapshot carries `current_percentage`, `future_percentage`, and
/// `percentage_change`, rounded to two decimal places. A shareholder with no
/// current holdings (the hypothetical names an id that only exists in the
/// shareholder collection) gets a current percentage of zero.
pub fn compare_scenario(
    issuances: &[Issuance],
    shareholders: &[Shareholder],
    share_classes: &[ShareClass],
    hypothetical: &HypotheticalIssuance,
) -> Result<ScenarioOutcome, CapTableError> {
    let current = compute_snapshot(issuances, shareholders, share_classes)?;

    validate_hypothetical(hypothetical)?;

    let mut future_issuances = issuances.to_vec();
    future_issuances.push(synthesize(hypothetical));

    let mut future = compute_snapshot(&future_issuances, shareholders, share_classes)?;

    let future_total = future.total_shares;
    for entry in &mut future.shareholder_summary {
        let current_pct = current
            .shareholder_summary
            .iter()
            .find(|s| s.id == entry.id)
            .map(|s| percentage_of(s.total_shares, current.total_shares))
            .unwrap_or(0.0);
        let future_pct = percentage_of(entry.total_shares, future_total);

        // Rounding happens only here, at attachment; the aggregates the
        // percentages were derived from stay exact.
        entry.current_percentage = Some(round2(current_pct));
        entry.future_percentage = Some(round2(future_pct));
        entry.percentage_change = Some(round2(future_pct - current_pct));
    }

    tracing::debug!(
        current_shares = current.total_shares,
        future_shares = future.total_shares,
        "compared dilution scenario"
    );

    Ok(ScenarioOutcome { current, future })
}

fn synthesize(hypothetical: &HypotheticalIssuance) -> Issuance {
    Issuance {
        id: SCENARIO_ISSUANCE_ID,
        shareholder_id: hypothetical.shareholder_id,
        share_class_id: hypothetical.share_class_id,
        shares: hypothetical.shares,
        price_per_share: hypothetical.price_per_share,
        issue_date: hypothetical.issue_date,
        round: hypothetical
            .round
            .clone()
            .unwrap_or_else(|| FUTURE_ROUND_LABEL.to_string()),
        created_at: None,
        round_description: None,
        payment_status: None,
    }
}

fn round2(value: f64) -> f64 {
    (value * PERCENT_SCALE).round() / PERCENT_SCALE
}
