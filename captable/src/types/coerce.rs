//! Deserialization helpers that coerce loosely-typed row values.
//!
//! Storage rows and client payloads deliver numeric columns inconsistently:
//! sometimes as JSON numbers, sometimes as strings (`"1000"`, `"0.001"`),
//! and round labels as either text or a bare number. These helpers accept
//! every observed shape and normalize to one canonical type, so joins and
//! arithmetic never miss on a representation mismatch.

use serde::de::{Deserializer, Error};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Deserialize a share count from an integer, an integral float, or a string.
pub(crate) fn share_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(n) => Ok(n),
        RawNumber::Float(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        RawNumber::Float(f) => Err(Error::custom(format!(
            "share count must be a whole number, got {}",
            f
        ))),
        RawNumber::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::custom(format!("cannot parse share count from '{}'", s))),
    }
}

/// Deserialize a price from a number or a numeric string.
pub(crate) fn price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(n) => Ok(n as f64),
        RawNumber::Float(f) => Ok(f),
        RawNumber::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::custom(format!("cannot parse price from '{}'", s))),
    }
}

/// Deserialize a round label from text or a bare number.
pub(crate) fn round_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawLabel {
        Text(String),
        Int(i64),
        Float(f64),
    }

    match RawLabel::deserialize(deserializer)? {
        RawLabel::Text(s) => Ok(s),
        RawLabel::Int(n) => Ok(n.to_string()),
        RawLabel::Float(f) => Ok(f.to_string()),
    }
}
