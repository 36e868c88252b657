//! Static registry of provider sheet layouts.
//!
//! One data-driven table replaces per-provider parsing code: each entry
//! describes where every column of a sheet sits and how it parses. The
//! table is read-only after process start.

use crate::cli::types::{Position, Provider};
use crate::error::{FantasyError, Result};

use super::types::{FieldKind, ProjectionSchema, SchemaField, StatColumn};

#[cfg(test)]
mod tests;

const fn field(column: StatColumn, index: usize, kind: FieldKind) -> SchemaField {
    SchemaField {
        column,
        index,
        kind,
    }
}

use super::types::FieldKind::{Decimal, Integer, Text};
use super::types::StatColumn::*;

/// FanGraphs batter rankings export (THE BAT X layout).
const FANGRAPHS_BATTER: &[SchemaField] = &[
    field(Rank, 0, Integer),
    field(PlayerName, 1, Text),
    field(Team, 2, Text),
    field(Games, 3, Decimal),
    field(AtBats, 4, Decimal),
    field(PlateAppearances, 5, Decimal),
    field(Hits, 6, Decimal),
    field(Singles, 7, Decimal),
    field(Doubles, 8, Decimal),
    field(Triples, 9, Decimal),
    field(HomeRuns, 10, Decimal),
    field(Runs, 11, Decimal),
    field(RunsBattedIn, 12, Decimal),
    field(Walks, 13, Decimal),
    field(IntentionalWalks, 14, Decimal),
    field(Strikeouts, 15, Decimal),
    field(HitByPitch, 16, Decimal),
    field(SacrificeFlies, 17, Decimal),
    field(SacrificeHits, 18, Decimal),
    field(StolenBases, 19, Decimal),
    field(CaughtStealing, 20, Decimal),
    field(BattingAverage, 21, Decimal),
];

/// FanGraphs pitcher rankings export (ATC layout).
const FANGRAPHS_PITCHER: &[SchemaField] = &[
    field(Rank, 0, Integer),
    field(PlayerName, 1, Text),
    field(Team, 2, Text),
    field(Wins, 3, Decimal),
    field(Losses, 4, Decimal),
    field(EarnedRunAverage, 5, Decimal),
    field(Games, 6, Decimal),
    field(GamesStarted, 7, Decimal),
    field(Saves, 8, Decimal),
    field(Holds, 9, Decimal),
    field(BlownSaves, 10, Decimal),
    field(InningsPitched, 11, Decimal),
    field(BattersFaced, 12, Decimal),
    field(HitsAllowed, 13, Decimal),
    field(RunsAllowed, 14, Decimal),
    field(EarnedRuns, 15, Decimal),
    field(HomeRunsAllowed, 16, Decimal),
    field(Walks, 17, Decimal),
    field(IntentionalWalks, 18, Decimal),
    field(HitByPitch, 19, Decimal),
    field(Strikeouts, 20, Decimal),
];

/// FantasyPros batter export. No singles column; the normalizer derives it.
const FANTASYPROS_BATTER: &[SchemaField] = &[
    field(PlayerName, 0, Text),
    field(Team, 1, Text),
    field(Positions, 2, Text),
    field(AtBats, 3, Decimal),
    field(Runs, 4, Decimal),
    field(HomeRuns, 5, Decimal),
    field(RunsBattedIn, 6, Decimal),
    field(StolenBases, 7, Decimal),
    field(BattingAverage, 8, Decimal),
    field(OnBasePercentage, 9, Decimal),
    field(Hits, 10, Decimal),
    field(Doubles, 11, Decimal),
    field(Triples, 12, Decimal),
    field(Walks, 13, Decimal),
    field(Strikeouts, 14, Decimal),
    field(SluggingPercentage, 15, Decimal),
    field(OnBasePlusSlugging, 16, Decimal),
];

/// FantasyPros pitcher export. No holds column; the canonical field stays zero.
const FANTASYPROS_PITCHER: &[SchemaField] = &[
    field(PlayerName, 0, Text),
    field(Team, 1, Text),
    field(Positions, 2, Text),
    field(InningsPitched, 3, Decimal),
    field(Strikeouts, 4, Decimal),
    field(Wins, 5, Decimal),
    field(Saves, 6, Decimal),
    field(EarnedRunAverage, 7, Decimal),
    field(Whip, 8, Decimal),
    field(EarnedRuns, 9, Decimal),
    field(HitsAllowed, 10, Decimal),
    field(Walks, 11, Decimal),
    field(HomeRunsAllowed, 12, Decimal),
    field(Games, 13, Decimal),
    field(GamesStarted, 14, Decimal),
    field(Losses, 15, Decimal),
    field(CompleteGames, 16, Decimal),
];

/// Every registered (provider, position) sheet. New providers register
/// entries here; lookup stays data-driven.
pub static SCHEMAS: &[ProjectionSchema] = &[
    ProjectionSchema {
        provider: Provider::FanGraphs,
        position: Position::Batter,
        fields: FANGRAPHS_BATTER,
    },
    ProjectionSchema {
        provider: Provider::FanGraphs,
        position: Position::Pitcher,
        fields: FANGRAPHS_PITCHER,
    },
    ProjectionSchema {
        provider: Provider::FantasyPros,
        position: Position::Batter,
        fields: FANTASYPROS_BATTER,
    },
    ProjectionSchema {
        provider: Provider::FantasyPros,
        position: Position::Pitcher,
        fields: FANTASYPROS_PITCHER,
    },
];

/// Find the registered layout for a (provider, position) pair.
pub fn lookup(provider: Provider, position: Position) -> Result<&'static ProjectionSchema> {
    lookup_in(SCHEMAS, provider, position)
}

pub(crate) fn lookup_in(
    table: &'static [ProjectionSchema],
    provider: Provider,
    position: Position,
) -> Result<&'static ProjectionSchema> {
    table
        .iter()
        .find(|s| s.provider == provider && s.position == position)
        .ok_or(FantasyError::UnknownSchema { provider, position })
}
