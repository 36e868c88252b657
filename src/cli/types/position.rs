//! Baseball position types.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player positions with distinct statistic sets.
///
/// Batters and pitchers score from different canonical vectors; the
/// position selects which half of the league weights applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Batter,
    Pitcher,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Batter => "batter",
            Position::Pitcher => "pitcher",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "batter" => Ok(Position::Batter),
            "pitcher" => Ok(Position::Pitcher),
            _ => Err(FantasyError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_round_trip() {
        assert_eq!("batter".parse::<Position>().unwrap(), Position::Batter);
        assert_eq!("pitcher".parse::<Position>().unwrap(), Position::Pitcher);
        assert_eq!(Position::Batter.to_string(), "batter");
        assert_eq!(Position::Pitcher.to_string(), "pitcher");
    }

    #[test]
    fn test_position_parse_case_insensitive() {
        assert_eq!("Batter".parse::<Position>().unwrap(), Position::Batter);
        assert_eq!("PITCHER".parse::<Position>().unwrap(), Position::Pitcher);
    }

    #[test]
    fn test_position_parse_unknown() {
        let err = "catcher".parse::<Position>().unwrap_err();
        match err {
            FantasyError::InvalidPosition { position } => assert_eq!(position, "catcher"),
            _ => panic!("Expected InvalidPosition error variant"),
        }
    }
}
