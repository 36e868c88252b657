//! Schema descriptions and canonical statistic vectors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cli::types::{Position, Provider};

#[cfg(test)]
mod tests;

/// One tokenized input row: ordered string fields, positional.
///
/// Produced by the CSV tokenizer (header row already removed) and never
/// mutated once handed to the normalizer.
pub type RawRecord = Vec<String>;

/// Declared parse kind for a sheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Decimal,
    Text,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Text => "text",
        };
        write!(f, "{}", s)
    }
}

/// Column identities across all registered provider sheets.
///
/// Identity and context columns (rank, rate stats, plate appearances, ...)
/// are parsed under their declared kind so a corrupt value anywhere in a
/// row rejects the row, but only the canonical subset lands in
/// [`BatterStats`]/[`PitcherStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatColumn {
    Rank,
    PlayerName,
    Team,
    Positions,
    Games,
    GamesStarted,
    AtBats,
    PlateAppearances,
    Hits,
    Singles,
    Doubles,
    Triples,
    HomeRuns,
    Runs,
    RunsBattedIn,
    Walks,
    IntentionalWalks,
    Strikeouts,
    HitByPitch,
    SacrificeFlies,
    SacrificeHits,
    StolenBases,
    CaughtStealing,
    BattingAverage,
    OnBasePercentage,
    SluggingPercentage,
    OnBasePlusSlugging,
    Wins,
    Losses,
    Saves,
    Holds,
    BlownSaves,
    CompleteGames,
    InningsPitched,
    BattersFaced,
    HitsAllowed,
    RunsAllowed,
    EarnedRuns,
    HomeRunsAllowed,
    EarnedRunAverage,
    Whip,
}

impl fmt::Display for StatColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatColumn::Rank => "rank",
            StatColumn::PlayerName => "player_name",
            StatColumn::Team => "team",
            StatColumn::Positions => "positions",
            StatColumn::Games => "games",
            StatColumn::GamesStarted => "games_started",
            StatColumn::AtBats => "at_bats",
            StatColumn::PlateAppearances => "plate_appearances",
            StatColumn::Hits => "hits",
            StatColumn::Singles => "singles",
            StatColumn::Doubles => "doubles",
            StatColumn::Triples => "triples",
            StatColumn::HomeRuns => "home_runs",
            StatColumn::Runs => "runs",
            StatColumn::RunsBattedIn => "runs_batted_in",
            StatColumn::Walks => "walks",
            StatColumn::IntentionalWalks => "intentional_walks",
            StatColumn::Strikeouts => "strikeouts",
            StatColumn::HitByPitch => "hit_by_pitch",
            StatColumn::SacrificeFlies => "sacrifice_flies",
            StatColumn::SacrificeHits => "sacrifice_hits",
            StatColumn::StolenBases => "stolen_bases",
            StatColumn::CaughtStealing => "caught_stealing",
            StatColumn::BattingAverage => "batting_average",
            StatColumn::OnBasePercentage => "on_base_percentage",
            StatColumn::SluggingPercentage => "slugging_percentage",
            StatColumn::OnBasePlusSlugging => "on_base_plus_slugging",
            StatColumn::Wins => "wins",
            StatColumn::Losses => "losses",
            StatColumn::Saves => "saves",
            StatColumn::Holds => "holds",
            StatColumn::BlownSaves => "blown_saves",
            StatColumn::CompleteGames => "complete_games",
            StatColumn::InningsPitched => "innings_pitched",
            StatColumn::BattersFaced => "batters_faced",
            StatColumn::HitsAllowed => "hits_allowed",
            StatColumn::RunsAllowed => "runs_allowed",
            StatColumn::EarnedRuns => "earned_runs",
            StatColumn::HomeRunsAllowed => "home_runs_allowed",
            StatColumn::EarnedRunAverage => "earned_run_average",
            StatColumn::Whip => "whip",
        };
        write!(f, "{}", s)
    }
}

/// One column of a provider sheet: what it is, where it sits, how it parses.
#[derive(Debug, Clone, Copy)]
pub struct SchemaField {
    pub column: StatColumn,
    pub index: usize,
    pub kind: FieldKind,
}

/// Ordered field layout for one (provider, position) sheet.
///
/// The field list covers every column a sheet of this kind carries; rows
/// shorter than [`width`](Self::width) are malformed.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionSchema {
    pub provider: Provider,
    pub position: Position,
    pub fields: &'static [SchemaField],
}

impl ProjectionSchema {
    /// Minimum number of fields a row of this sheet must carry.
    pub fn width(&self) -> usize {
        self.fields.iter().map(|f| f.index + 1).max().unwrap_or(0)
    }

    /// Whether the sheet supplies a column directly.
    pub fn has_column(&self, column: StatColumn) -> bool {
        self.fields.iter().any(|f| f.column == column)
    }
}

/// Canonical batting statistics, provider-independent.
///
/// Fields a provider does not supply default to exactly zero. `singles` may
/// be derived from hit totals when a sheet lacks the column (see
/// [`crate::baseball::normalize`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BatterStats {
    pub hits: f64,
    pub singles: f64,
    pub doubles: f64,
    pub triples: f64,
    pub home_runs: f64,
    pub runs: f64,
    pub rbi: f64,
    pub walks: f64,
    pub strikeouts: f64,
    pub stolen_bases: f64,
}

/// Canonical pitching statistics, provider-independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PitcherStats {
    pub strikeouts: f64,
    pub innings_pitched: f64,
    pub hits_allowed: f64,
    pub earned_runs: f64,
    pub walks: f64,
    pub wins: f64,
    pub losses: f64,
    pub saves: f64,
    pub holds: f64,
}

/// Position-tagged canonical vector produced by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CanonicalStats {
    Batter(BatterStats),
    Pitcher(PitcherStats),
}

/// Normalized output for one input row: identity plus canonical vector.
///
/// Value type, produced fresh per row and owned by the pipeline invocation
/// that created it. Serializable so imported sheets can be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPlayer {
    pub name: String,
    pub team: Option<String>,
    pub stats: CanonicalStats,
}

/// Scored output for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProjection {
    pub player_name: String,
    pub total_points: f64,
}
