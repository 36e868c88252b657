//! League scoring weights: per-statistic multipliers.

use crate::error::{FantasyError, Result};
use serde::{Deserialize, Serialize};


/// Batting multipliers.
///
/// `total_bases` applies to a base-weighted combination: single x1,
/// double x2, triple x3, home run x4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingWeights {
    pub runs_scored: f64,
    pub total_bases: f64,
    pub runs_batted_in: f64,
    pub walks: f64,
    pub strikeouts: f64,
    pub stolen_bases: f64,
}

/// Pitching multipliers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchingWeights {
    pub strikeouts: f64,
    pub innings_pitched: f64,
    pub hits_allowed: f64,
    pub earned_runs: f64,
    pub walks_issued: f64,
    pub wins: f64,
    pub losses: f64,
    pub saves: f64,
    pub holds: f64,
}

/// Full league scoring configuration, supplied by the caller per request
/// and immutable for the duration of a scoring run.
///
/// Deserialization is strict: a missing multiplier is a configuration
/// error, not a silent zero. Fields irrelevant to the requested position
/// are simply never read by the scoring engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub batting: BattingWeights,
    pub pitching: PitchingWeights,
}

impl ScoringWeights {
    /// Reject non-finite multipliers before any scoring happens.
    pub fn validate(&self) -> Result<()> {
        let b = &self.batting;
        let p = &self.pitching;
        let named = [
            ("batting.runs_scored", b.runs_scored),
            ("batting.total_bases", b.total_bases),
            ("batting.runs_batted_in", b.runs_batted_in),
            ("batting.walks", b.walks),
            ("batting.strikeouts", b.strikeouts),
            ("batting.stolen_bases", b.stolen_bases),
            ("pitching.strikeouts", p.strikeouts),
            ("pitching.innings_pitched", p.innings_pitched),
            ("pitching.hits_allowed", p.hits_allowed),
            ("pitching.earned_runs", p.earned_runs),
            ("pitching.walks_issued", p.walks_issued),
            ("pitching.wins", p.wins),
            ("pitching.losses", p.losses),
            ("pitching.saves", p.saves),
            ("pitching.holds", p.holds),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(FantasyError::InvalidWeights {
                    message: format!("{} is not a finite number: {}", name, value),
                });
            }
        }
        Ok(())
    }
}
