//! Database schema and connection management

use rusqlite::Connection;
use std::path::PathBuf;

use crate::error::{FantasyError, Result};

/// Database connection manager for imported projection sheets
pub struct ProjectionDatabase {
    pub(crate) conn: Connection,
}

impl ProjectionDatabase {
    /// Open the on-disk database and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the data directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open an in-memory database (used by tests)
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| FantasyError::Storage {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("fantasy-mlb").join("projections.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // sort_order preserves sheet order across a round-trip
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS projection_players (
                provider TEXT NOT NULL,
                position TEXT NOT NULL,
                season TEXT NOT NULL,
                sort_order INTEGER NOT NULL,
                name TEXT NOT NULL,
                team TEXT,
                stats TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (provider, position, season, sort_order)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_projection_sheet
             ON projection_players(provider, position, season)",
            [],
        )?;

        Ok(())
    }
}
