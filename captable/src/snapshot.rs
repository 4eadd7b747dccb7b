//! The equity snapshot calculator.
//!
//! A pure, single-pass aggregation over three record collections. It joins
//! issuances to shareholders and share classes, derives company totals and
//! per-group summaries, and selects the latest price per share. No I/O, no
//! shared state: identical inputs always produce identical output.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::errors::CapTableError;
use crate::types::{
    ClassSummary, Holding, Issuance, ShareClass, Shareholder, ShareholderSummary, Snapshot,
};
use crate::validation::validate_issuance;

/// Compute the cap-table snapshot for one company.
///
/// If any input collection is empty the result is the zero snapshot; that is
/// a well-defined state, not an error. Issuances referencing an unknown
/// shareholder or share class still count toward `total_shares` and
/// `total_value` but produce no summary entry: stale reference data must not
/// make the whole report unavailable. Malformed numeric fields, by contrast,
/// fail the entire call with [`CapTableError::Validation`].
pub fn compute_snapshot(
    issuances: &[Issuance],
    shareholders: &[Shareholder],
    share_classes: &[ShareClass],
) -> Result<Snapshot, CapTableError> {
    for issuance in issuances {
        validate_issuance(issuance)?;
    }

    if issuances.is_empty() || shareholders.is_empty() || share_classes.is_empty() {
        return Ok(Snapshot::zero());
    }

    let class_by_id: HashMap<i64, &ShareClass> =
        share_classes.iter().map(|c| (c.id, c)).collect();
    let shareholder_by_id: HashMap<i64, &Shareholder> =
        shareholders.iter().map(|s| (s.id, s)).collect();

    let mut total_shares: i64 = 0;
    let mut total_value: f64 = 0.0;
    for issuance in issuances {
        total_shares = total_shares.checked_add(issuance.shares).ok_or_else(|| {
            CapTableError::Computation(format!(
                "share total overflowed adding issuance {}",
                issuance.id
            ))
        })?;
        total_value += issuance.value();
    }

    let latest_valuation_per_share = latest_price(issuances);
    let company_valuation = total_shares as f64 * latest_valuation_per_share;

    let class_summary = build_class_summary(issuances, &class_by_id, total_shares);
    let shareholder_summary =
        build_shareholder_summary(issuances, &shareholder_by_id, &class_by_id, total_shares);

    tracing::debug!(
        total_shares,
        total_value,
        classes = class_summary.len(),
        shareholders = shareholder_summary.len(),
        "computed equity snapshot"
    );

    Ok(Snapshot {
        total_shares,
        total_value,
        class_summary,
        shareholder_summary,
        latest_valuation_per_share,
        company_valuation,
    })
}

/// Price per share of the most recent issuance: latest `issue_date` wins,
/// same-day ties broken by latest `created_at`, and rows missing
/// `created_at` rank after rows that have one. Input order settles anything
/// still tied, so the pick is deterministic.
fn latest_price(issuances: &[Issuance]) -> f64 {
    let mut order: Vec<&Issuance> = issuances.iter().collect();
    order.sort_by(|a, b| {
        b.issue_date
            .cmp(&a.issue_date)
            .then_with(|| match (&a.created_at, &b.created_at) {
                (Some(a_ts), Some(b_ts)) => b_ts.cmp(a_ts),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    });
    order.first().map(|i| i.price_per_share).unwrap_or(0.0)
}

struct ClassAccum {
    class_id: i64,
    total_shares: i64,
    total_value: f64,
    round: String,
}

fn build_class_summary(
    issuances: &[Issuance],
    class_by_id: &HashMap<i64, &ShareClass>,
    total_shares: i64,
) -> Vec<ClassSummary> {
    // First-seen input order, so iteration never depends on hash order.
    let mut groups: Vec<ClassAccum> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for issuance in issuances {
        let slot = *index.entry(issuance.share_class_id).or_insert_with(|| {
            groups.push(ClassAccum {
                class_id: issuance.share_class_id,
                total_shares: 0,
                total_value: 0.0,
                round: issuance.round.clone(),
            });
            groups.len() - 1
        });
        groups[slot].total_shares += issuance.shares;
        groups[slot].total_value += issuance.value();
    }

    let mut summary: Vec<ClassSummary> = Vec::with_capacity(groups.len());
    for group in groups {
        let Some(class) = class_by_id.get(&group.class_id) else {
            tracing::warn!(
                class_id = group.class_id,
                shares = group.total_shares,
                "share class not found; group excluded from class summary"
            );
            continue;
        };
        summary.push(ClassSummary {
            id: class.id,
            name: class.name.clone(),
            priority: class.priority,
            total_shares: group.total_shares,
            total_value: group.total_value,
            percentage: percentage_of(group.total_shares, total_shares),
            round: group.round,
        });
    }
    summary.sort_by(|a, b| a.priority.cmp(&b.priority));
    summary
}

struct HolderAccum {
    shareholder_id: i64,
    total_shares: i64,
    total_value: f64,
    holdings: Vec<Holding>,
}

fn build_shareholder_summary(
    issuances: &[Issuance],
    shareholder_by_id: &HashMap<i64, &Shareholder>,
    class_by_id: &HashMap<i64, &ShareClass>,
    total_shares: i64,
) -> Vec<ShareholderSummary> {
    let mut groups: Vec<HolderAccum> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for issuance in issuances {
        let slot = *index.entry(issuance.shareholder_id).or_insert_with(|| {
            groups.push(HolderAccum {
                shareholder_id: issuance.shareholder_id,
                total_shares: 0,
                total_value: 0.0,
                holdings: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].total_shares += issuance.shares;
        groups[slot].total_value += issuance.value();
        groups[slot].holdings.push(Holding {
            id: issuance.id,
            shares: issuance.shares,
            price_per_share: issuance.price_per_share,
            issue_date: issuance.issue_date,
            share_class_name: class_by_id
                .get(&issuance.share_class_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            valuation: issuance.value(),
            round: issuance.round.clone(),
        });
    }

    let mut summary: Vec<ShareholderSummary> = Vec::with_capacity(groups.len());
    for group in groups {
        let Some(shareholder) = shareholder_by_id.get(&group.shareholder_id) else {
            tracing::warn!(
                shareholder_id = group.shareholder_id,
                shares = group.total_shares,
                "shareholder not found; group excluded from shareholder summary"
            );
            continue;
        };
        summary.push(ShareholderSummary {
            id: shareholder.id,
            name: shareholder.name.clone(),
            email: shareholder.email.clone(),
            holder_type: shareholder.holder_type.clone(),
            total_shares: group.total_shares,
            total_value: group.total_value,
            percentage: percentage_of(group.total_shares, total_shares),
            holdings: group.holdings,
            current_percentage: None,
            future_percentage: None,
            percentage_change: None,
        });
    }
    summary.sort_by(|a, b| b.total_shares.cmp(&a.total_shares));
    summary
}

pub(crate) fn percentage_of(shares: i64, total_shares: i64) -> f64 {
    if total_shares > 0 {
        shares as f64 / total_shares as f64 * 100.0
    } else {
        0.0
    }
}
