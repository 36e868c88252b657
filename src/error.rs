//! Error types for the fantasy baseball projection CLI

use thiserror::Error;

use crate::baseball::types::{FieldKind, StatColumn};
use crate::cli::types::{Position, Provider};

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("no schema registered for provider '{provider}' position '{position}'")]
    UnknownSchema {
        provider: Provider,
        position: Position,
    },

    #[error("malformed record at row {row}: {source}")]
    MalformedRecord { row: usize, source: RecordError },

    #[error("invalid scoring weights: {message}")]
    InvalidWeights { message: String },

    #[error("invalid provider: {provider}")]
    InvalidProvider { provider: String },

    #[error("invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV tokenization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("storage error: {message}")]
    Storage { message: String },
}

/// Why a single row failed normalization. The batch driver wraps this with
/// the offending row index.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("row has {actual} fields, schema expects {expected}")]
    TooShort { expected: usize, actual: usize },

    #[error("field '{column}' at index {index} is not a valid {kind}: {value:?}")]
    Parse {
        column: StatColumn,
        index: usize,
        kind: FieldKind,
        value: String,
    },
}
