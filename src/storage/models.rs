//! Data models for the storage layer

use serde::{Deserialize, Serialize};

/// Summary of one imported sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetSummary {
    pub provider: String,
    pub position: String,
    pub season: String,
    pub players: u32,
}
