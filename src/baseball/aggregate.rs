//! Batch driver: normalize and score rows, preserving input order.

use rayon::prelude::*;

use crate::cli::types::{Position, Provider};
use crate::error::{FantasyError, Result};

use super::compute;
use super::normalize::normalize;
use super::registry;
use super::types::{NormalizedPlayer, PlayerProjection, RawRecord};
use super::weights::ScoringWeights;


/// Normalize and score an ordered batch of rows.
///
/// Output order matches input order: callers match players by position in
/// the sequence. The whole batch fails on the first malformed row; a batch
/// silently missing players is worse than an explicit rejection.
///
/// Schema lookup and weight validation happen before any row is touched.
pub fn aggregate(
    rows: &[RawRecord],
    provider: Provider,
    position: Position,
    weights: &ScoringWeights,
) -> Result<Vec<PlayerProjection>> {
    let schema = registry::lookup(provider, position)?;
    weights.validate()?;

    // Rows are independent, so they fan out; collecting positionally and
    // scanning in order keeps the reported failure at the first bad row
    // regardless of scheduling.
    let scored: Vec<_> = rows
        .par_iter()
        .map(|row| {
            normalize(row, schema).map(|player| PlayerProjection {
                player_name: player.name,
                total_points: compute::score(&player.stats, weights),
            })
        })
        .collect();

    let mut projections = Vec::with_capacity(scored.len());
    for (row, result) in scored.into_iter().enumerate() {
        match result {
            Ok(projection) => projections.push(projection),
            Err(source) => return Err(FantasyError::MalformedRecord { row, source }),
        }
    }
    Ok(projections)
}

/// Score players normalized earlier (e.g. loaded from storage).
pub fn score_players(
    players: &[NormalizedPlayer],
    weights: &ScoringWeights,
) -> Result<Vec<PlayerProjection>> {
    weights.validate()?;
    Ok(players
        .iter()
        .map(|player| PlayerProjection {
            player_name: player.name.clone(),
            total_points: compute::score(&player.stats, weights),
        })
        .collect())
}

/// Normalize an ordered batch without scoring (the import path).
pub fn normalize_rows(
    rows: &[RawRecord],
    provider: Provider,
    position: Position,
) -> Result<Vec<NormalizedPlayer>> {
    let schema = registry::lookup(provider, position)?;
    rows.iter()
        .enumerate()
        .map(|(row, record)| {
            normalize(record, schema)
                .map_err(|source| FantasyError::MalformedRecord { row, source })
        })
        .collect()
}
