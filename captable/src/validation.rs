//! Per-record validation of calculator inputs.
//!
//! Type coercion happens at deserialization (see `types::coerce`); these
//! checks enforce the value ranges the calculator relies on. A failure is
//! fatal to the whole call and names the offending record.

use crate::errors::CapTableError;
use crate::types::{HypotheticalIssuance, Issuance};

/// Validate one stored issuance: positive share count, non-negative finite
/// price.
pub fn validate_issuance(issuance: &Issuance) -> Result<(), CapTableError> {
    if issuance.shares < 1 {
        return Err(CapTableError::Validation {
            record: format!("issuance {}", issuance.id),
            field: "shares",
            reason: format!("must be a positive share count, got {}", issuance.shares),
        });
    }
    validate_price(issuance.price_per_share, format!("issuance {}", issuance.id))
}

/// Validate a hypothetical issuance before it is injected into a scenario.
pub fn validate_hypothetical(hypothetical: &HypotheticalIssuance) -> Result<(), CapTableError> {
    if hypothetical.shares < 1 {
        return Err(CapTableError::Validation {
            record: "hypothetical issuance".to_string(),
            field: "shares",
            reason: format!("must be a positive share count, got {}", hypothetical.shares),
        });
    }
    validate_price(
        hypothetical.price_per_share,
        "hypothetical issuance".to_string(),
    )
}

fn validate_price(price: f64, record: String) -> Result<(), CapTableError> {
    if !price.is_finite() {
        return Err(CapTableError::Validation {
            record,
            field: "pricePerShare",
            reason: "must be a finite number".to_string(),
        });
    }
    if price < 0.0 {
        return Err(CapTableError::Validation {
            record,
            field: "pricePerShare",
            reason: format!("must be non-negative, got {}", price),
        });
    }
    Ok(())
}
