//! Basic database query operations

use rusqlite::params;
use std::time::{SystemTime, UNIX_EPOCH};

use super::models::SheetSummary;
use super::schema::ProjectionDatabase;
use crate::baseball::types::NormalizedPlayer;
use crate::cli::types::{Position, Provider, Season};
use crate::error::{FantasyError, Result};

impl ProjectionDatabase {
    /// Replace the stored sheet for (provider, position, season).
    ///
    /// Runs in one transaction so a failed import never leaves a half
    /// replaced sheet behind. Returns the number of players stored.
    pub fn replace_sheet(
        &mut self,
        provider: Provider,
        position: Position,
        season: &Season,
        players: &[NormalizedPlayer],
    ) -> Result<usize> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| FantasyError::Storage {
                message: e.to_string(),
            })?
            .as_secs();

        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM projection_players
             WHERE provider = ? AND position = ? AND season = ?",
            params![provider.to_string(), position.to_string(), season.as_str()],
        )?;
        for (sort_order, player) in players.iter().enumerate() {
            tx.execute(
                "INSERT INTO projection_players
                 (provider, position, season, sort_order, name, team, stats, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    provider.to_string(),
                    position.to_string(),
                    season.as_str(),
                    sort_order as i64,
                    player.name,
                    player.team,
                    serde_json::to_string(&player.stats)?,
                    now,
                ],
            )?;
        }
        tx.commit()?;
        Ok(players.len())
    }

    /// Load the stored sheet for (provider, position, season) in import order.
    ///
    /// An unknown key returns an empty sheet, not an error.
    pub fn load_sheet(
        &self,
        provider: Provider,
        position: Position,
        season: &Season,
    ) -> Result<Vec<NormalizedPlayer>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, team, stats FROM projection_players
             WHERE provider = ? AND position = ? AND season = ?
             ORDER BY sort_order",
        )?;
        let rows = stmt.query_map(
            params![provider.to_string(), position.to_string(), season.as_str()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )?;

        let mut players = Vec::new();
        for row in rows {
            let (name, team, stats) = row?;
            players.push(NormalizedPlayer {
                name,
                team,
                stats: serde_json::from_str(&stats)?,
            });
        }
        Ok(players)
    }

    /// Summarize every stored sheet.
    pub fn list_sheets(&self) -> Result<Vec<SheetSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT provider, position, season, COUNT(*) FROM projection_players
             GROUP BY provider, position, season
             ORDER BY provider, position, season",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(SheetSummary {
                provider: row.get(0)?,
                position: row.get(1)?,
                season: row.get(2)?,
                players: row.get(3)?,
            })
        })?;

        let mut sheets = Vec::new();
        for sheet in rows {
            sheets.push(sheet?);
        }
        Ok(sheets)
    }
}
