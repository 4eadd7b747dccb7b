use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The computed aggregate view of a company's equity.
///
/// A snapshot is a value object: recomputed from scratch on every call,
/// never cached or incrementally updated. `total_shares` and `total_value`
/// cover every issuance, including those whose shareholder or share class
/// could not be resolved; the summaries only list resolvable groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub total_shares: i64,

    pub total_value: f64,

    /// Per-class breakdown, ascending by class priority.
    pub class_summary: Vec<ClassSummary>,

    /// Per-shareholder breakdown, descending by shares held.
    pub shareholder_summary: Vec<ShareholderSummary>,

    /// Price per share of the most recent issuance (issue date, then
    /// creation timestamp, break ties).
    pub latest_valuation_per_share: f64,

    /// `total_shares × latest_valuation_per_share`.
    pub company_valuation: f64,
}

impl Snapshot {
    /// The snapshot of a company with no computable equity: all totals zero,
    /// both summaries empty.
    pub fn zero() -> Self {
        Self {
            total_shares: 0,
            total_value: 0.0,
            class_summary: Vec::new(),
            shareholder_summary: Vec::new(),
            latest_valuation_per_share: 0.0,
            company_valuation: 0.0,
        }
    }
}

/// Aggregate position of one share class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    pub id: i64,

    pub name: String,

    pub priority: i32,

    pub total_shares: i64,

    pub total_value: f64,

    /// Share of `total_shares`, exact (unrounded). 0 when the company has
    /// no shares outstanding.
    pub percentage: f64,

    /// Round label of the class's first issuance in input order.
    pub round: String,
}

/// Aggregate position of one shareholder, with per-issuance detail.
///
/// The three percentage fields at the bottom are attached only by the
/// scenario comparator; a plain snapshot leaves them `None` and omits them
/// from JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareholderSummary {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "type", default)]
    pub holder_type: Option<String>,

    pub total_shares: i64,

    pub total_value: f64,

    /// Share of `total_shares`, exact (unrounded).
    pub percentage: f64,

    /// Per-issuance detail, in input order.
    pub holdings: Vec<Holding>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_percentage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_percentage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_change: Option<f64>,
}

/// One issuance as seen from its shareholder's summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: i64,

    pub shares: i64,

    pub price_per_share: f64,

    pub issue_date: NaiveDate,

    /// Resolved class name, or "Unknown" when the issuance references a
    /// class id absent from the share-class collection.
    pub share_class_name: String,

    pub valuation: f64,

    pub round: String,
}

/// Result of modeling a hypothetical issuance: the cap table as it stands
/// and as it would stand, with dilution percentages attached to every
/// future shareholder entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioOutcome {
    #[serde(rename = "currentState")]
    pub current: Snapshot,

    #[serde(rename = "futureState")]
    pub future: Snapshot,
}
