//! Fantasy Baseball Projection Scoring Library
//!
//! Converts per-player statistical projections from third-party providers
//! into normalized fantasy-points totals under configurable league scoring
//! settings.
//!
//! ## Features
//!
//! - **Schema Registry**: data-driven column layouts per (provider, position) sheet
//! - **Stat Normalizer**: provider rows reconciled into canonical stat vectors
//! - **Scoring Engine**: pure, deterministic weighted scoring
//! - **Projection Aggregator**: order-preserving, fail-fast batch scoring
//! - **Local Storage**: imported sheets kept in SQLite for re-scoring under
//!   fresh weights
//!
//! ## Quick Start
//!
//! ```rust
//! use fantasy_mlb::baseball::compute::score_batter;
//! use fantasy_mlb::baseball::types::BatterStats;
//! use fantasy_mlb::baseball::weights::BattingWeights;
//!
//! let stats = BatterStats {
//!     runs: 80.0,
//!     singles: 100.0,
//!     doubles: 30.0,
//!     ..Default::default()
//! };
//! let weights = BattingWeights {
//!     runs_scored: 1.0,
//!     total_bases: 1.0,
//!     ..Default::default()
//! };
//! assert_eq!(score_batter(&stats, &weights), 240.0);
//! ```
//!
//! Batch scoring goes through [`aggregate`], which takes tokenized rows
//! (header already removed), a provider, a position, and league weights,
//! and returns one projection per row in input order.

pub mod baseball;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use baseball::aggregate::{aggregate, normalize_rows, score_players};
pub use baseball::types::{CanonicalStats, NormalizedPlayer, PlayerProjection, RawRecord};
pub use baseball::weights::ScoringWeights;
pub use cli::types::{Position, Provider, Season};
pub use error::{FantasyError, Result};
pub use models::output::ProjectionSet;
