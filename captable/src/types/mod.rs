mod coerce;
mod issuance;
mod share_class;
mod shareholder;
mod snapshot;

pub use issuance::{HypotheticalIssuance, Issuance};
pub use share_class::ShareClass;
pub use shareholder::Shareholder;
pub use snapshot::{ClassSummary, Holding, ScenarioOutcome, ShareholderSummary, Snapshot};
