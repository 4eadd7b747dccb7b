//! Error taxonomy for the calculator.

/// Errors produced by the snapshot calculator and scenario comparator.
///
/// There are exactly two kinds. `Validation` is a client-input error and is
/// always fatal to the call: no partial snapshot is ever returned, since a
/// silently dropped issuance would corrupt the aggregate totals. Unmatched
/// foreign keys are deliberately not errors; they follow the tolerance
/// policy documented on [`compute_snapshot`](crate::compute_snapshot).
#[derive(thiserror::Error, Debug)]
pub enum CapTableError {
    /// A required input field is malformed or out of range. Names the
    /// offending record and field so callers can surface a 4xx-equivalent.
    #[error("invalid {field} on {record}: {reason}")]
    Validation {
        record: String,
        field: &'static str,
        reason: String,
    },
    /// Internal arithmetic failure (e.g. share-count overflow). Unreachable
    /// for realistic cap tables.
    #[error("computation failed: {0}")]
    Computation(String),
}
