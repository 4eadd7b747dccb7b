use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::coerce;

/// A single grant of shares: the immutable input fact of every calculation.
///
/// Issuances are owned by the storage layer; the calculator never creates,
/// updates, or deletes them. `round_description` and `payment_status` are
/// opaque passthrough columns and play no part in any computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Issuance {
    pub id: i64,

    pub shareholder_id: i64,

    pub share_class_id: i64,

    #[serde(deserialize_with = "coerce::share_count")]
    pub shares: i64,

    #[serde(deserialize_with = "coerce::price")]
    pub price_per_share: f64,

    pub issue_date: NaiveDate,

    /// Financing-round label. Opaque: displayed as-is, never ordered numerically.
    #[serde(deserialize_with = "coerce::round_label")]
    pub round: String,

    /// Row creation timestamp, used only to break same-day ties when
    /// selecting the latest price.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub round_description: Option<String>,

    #[serde(default)]
    pub payment_status: Option<String>,
}

impl Issuance {
    /// Monetary value of this issuance: `shares × price_per_share`.
    pub fn value(&self) -> f64 {
        self.shares as f64 * self.price_per_share
    }
}

/// A future issuance to model against the current cap table.
///
/// Carries no `id`; the scenario comparator assigns the reserved sentinel
/// so it can never collide with a storage-assigned issuance id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HypotheticalIssuance {
    pub shareholder_id: i64,

    pub share_class_id: i64,

    #[serde(deserialize_with = "coerce::share_count")]
    pub shares: i64,

    #[serde(deserialize_with = "coerce::price")]
    pub price_per_share: f64,

    pub issue_date: NaiveDate,

    /// Round label; defaults to "Future Scenario" when absent.
    #[serde(default)]
    pub round: Option<String>,
}
