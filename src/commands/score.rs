//! Score a projection sheet under league weights.

use std::path::PathBuf;

use crate::baseball::aggregate::{aggregate, score_players};
use crate::cli::types::{Position, Provider, Season};
use crate::error::Result;
use crate::models::output::ProjectionSet;
use crate::storage::ProjectionDatabase;

use super::common::{load_weights, read_rows};

/// Where the rows to score come from.
#[derive(Debug)]
pub enum ScoreSource {
    Csv(PathBuf),
    Stored,
}

/// Parameters for the `score` command.
pub struct ScoreParams {
    pub provider: Provider,
    pub position: Position,
    pub season: Season,
    pub source: ScoreSource,
    pub settings: PathBuf,
    pub name: String,
    pub as_json: bool,
    pub verbose: bool,
}

pub fn handle_score(params: ScoreParams) -> Result<()> {
    let weights = load_weights(&params.settings)?;

    let projections = match &params.source {
        ScoreSource::Csv(path) => {
            if params.verbose {
                println!("Reading {}...", path.display());
            }
            let rows = read_rows(path)?;
            if params.verbose {
                println!("✓ {} rows tokenized", rows.len());
            }
            aggregate(&rows, params.provider, params.position, &weights)?
        }
        ScoreSource::Stored => {
            if params.verbose {
                println!(
                    "Loading stored {} {} sheet for season {}...",
                    params.provider, params.position, params.season
                );
            }
            let db = ProjectionDatabase::new()?;
            let players = db.load_sheet(params.provider, params.position, &params.season)?;
            if params.verbose {
                println!("✓ {} stored players loaded", players.len());
            }
            score_players(&players, &weights)?
        }
    };

    let set = ProjectionSet {
        projection_name: params.name,
        season: params.season,
        projections,
    };

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&set)?);
    } else {
        println!("{} (season {})", set.projection_name, set.season);
        for projection in &set.projections {
            println!("{}: {:.2}", projection.player_name, projection.total_points);
        }
    }

    Ok(())
}
