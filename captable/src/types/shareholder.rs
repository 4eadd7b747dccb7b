use serde::{Deserialize, Serialize};

/// A holder of equity, referenced by issuances via `shareholderId`.
///
/// An issuance pointing at an unknown shareholder id is tolerated by the
/// calculator (its shares still count toward company totals) rather than
/// treated as an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shareholder {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    /// Individual vs. entity, opaque passthrough.
    #[serde(rename = "type", default)]
    pub holder_type: Option<String>,
}
