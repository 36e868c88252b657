//! Import a provider CSV into local storage.

use std::path::PathBuf;

use crate::baseball::aggregate::normalize_rows;
use crate::cli::types::{Position, Provider, Season};
use crate::error::Result;
use crate::storage::ProjectionDatabase;

use super::common::read_rows;

pub fn handle_import(
    csv: PathBuf,
    provider: Provider,
    position: Position,
    season: Season,
    verbose: bool,
) -> Result<()> {
    let rows = read_rows(&csv)?;
    if verbose {
        println!("✓ {} rows tokenized from {}", rows.len(), csv.display());
    }

    // Normalize before anything touches the database: a malformed sheet
    // is rejected whole rather than stored with gaps.
    let players = normalize_rows(&rows, provider, position)?;

    let mut db = ProjectionDatabase::new()?;
    let stored = db.replace_sheet(provider, position, &season, &players)?;
    println!(
        "✓ stored {} {} {}s for season {}",
        stored, provider, position, season
    );

    Ok(())
}
