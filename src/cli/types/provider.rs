//! Projection provider identifiers.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Third-party sources of player projections.
///
/// Each provider publishes its own sheet layout per position; the layouts
/// live in [`crate::baseball::registry`]. Adding a provider means adding a
/// variant here and registering its layouts there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    FanGraphs,
    FantasyPros,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Provider::FanGraphs => "fangraphs",
            Provider::FantasyPros => "fantasypros",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Provider {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fangraphs" => Ok(Provider::FanGraphs),
            "fantasypros" => Ok(Provider::FantasyPros),
            _ => Err(FantasyError::InvalidProvider {
                provider: s.to_string(),
            }),
        }
    }
}
