//! List imported sheets and their player counts.

use crate::error::Result;
use crate::storage::ProjectionDatabase;

pub fn handle_sheets() -> Result<()> {
    let db = ProjectionDatabase::new()?;
    let sheets = db.list_sheets()?;

    if sheets.is_empty() {
        println!("No sheets imported yet");
        return Ok(());
    }

    for sheet in sheets {
        println!(
            "{} {} season {}: {} players",
            sheet.provider, sheet.position, sheet.season, sheet.players
        );
    }
    Ok(())
}
