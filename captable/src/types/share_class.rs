use serde::{Deserialize, Serialize};

/// A category of stock (e.g. ordinary vs. preferred).
///
/// `priority` drives report ordering only: lower values sort first in the
/// class summary. It carries no liquidation semantics here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareClass {
    pub id: i64,

    pub name: String,

    pub priority: i32,
}
