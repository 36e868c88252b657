//! Storage layer for imported projection sheets
//!
//! A thin abstraction over SQLite, organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Sheet replace/load/list operations
//!
//! The database handle is explicit: commands construct it and pass it
//! where needed. The scoring core has no storage dependency.

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::ProjectionDatabase;
