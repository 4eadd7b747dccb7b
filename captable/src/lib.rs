//! Cap-table snapshot computation.
//!
//! Pure, synchronous equity arithmetic over three record collections:
//! issuances, shareholders, and share classes. The storage layer that
//! produces those rows and the transport layer that serializes the results
//! are external collaborators; this crate performs no I/O.

pub mod errors;
pub mod scenario;
pub mod snapshot;
pub mod types;
pub mod validation;

pub use errors::CapTableError;
pub use scenario::{compare_scenario, FUTURE_ROUND_LABEL, SCENARIO_ISSUANCE_ID};
pub use snapshot::compute_snapshot;
pub use types::{
    ClassSummary, Holding, HypotheticalIssuance, Issuance, ScenarioOutcome, ShareClass,
    Shareholder, ShareholderSummary, Snapshot,
};
