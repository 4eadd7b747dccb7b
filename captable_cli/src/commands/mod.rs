pub mod scenario;
pub mod snapshot;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Load one record collection from a JSON file. The CLI stands in for the
/// storage layer that would otherwise supply these rows.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
