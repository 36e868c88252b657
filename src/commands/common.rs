//! Shared helpers for command handlers.

use std::path::Path;

use crate::baseball::types::RawRecord;
use crate::baseball::weights::ScoringWeights;
use crate::error::{FantasyError, Result};

/// Read a provider CSV export into tokenized rows.
///
/// The header row is consumed here; the scoring core only ever sees data
/// rows. The reader is flexible about row length so a short row surfaces
/// downstream as a malformed record with its index, not a tokenizer error.
pub fn read_rows(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Load and validate league scoring weights from a JSON file.
///
/// Every multiplier must be present; a missing field is a weights
/// configuration error rather than a generic JSON error.
pub fn load_weights(path: &Path) -> Result<ScoringWeights> {
    let text = std::fs::read_to_string(path)?;
    let weights: ScoringWeights =
        serde_json::from_str(&text).map_err(|e| FantasyError::InvalidWeights {
            message: e.to_string(),
        })?;
    weights.validate()?;
    Ok(weights)
}
