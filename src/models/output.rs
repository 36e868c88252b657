//! Output models used for printing and JSON serialization.

use serde::{Deserialize, Serialize};

use crate::baseball::types::PlayerProjection;
use crate::cli::types::Season;

/// Scored projection payload returned to the caller.
///
/// `projection_name` and `season` are echoed from the request unchanged;
/// `projections` is ordered to match the input rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSet {
    pub projection_name: String,
    pub season: Season,
    pub projections: Vec<PlayerProjection>,
}
