//! Command handlers for the fantasy-mlb CLI.
//!
//! Handlers own the collaborator concerns the scoring core excludes:
//! file IO, CSV tokenization (header removal included), weights loading,
//! storage access, and output presentation.

pub mod common;
pub mod import;
pub mod schemas;
pub mod score;
pub mod sheets;
