//! Core projection pipeline: schema registry, stat normalizer, scoring
//! engine, and batch aggregator.
//!
//! The pipeline is stateless and side-effect-free per invocation; nothing
//! here logs, retries, or touches storage.

pub mod aggregate;
pub mod compute;
pub mod normalize;
pub mod registry;
pub mod types;
pub mod weights;

pub use aggregate::{aggregate, normalize_rows, score_players};
pub use types::{
    BatterStats, CanonicalStats, NormalizedPlayer, PitcherStats, PlayerProjection, RawRecord,
};
pub use weights::{BattingWeights, PitchingWeights, ScoringWeights};
