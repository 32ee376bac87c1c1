//! sqlseed-core: PostgreSQL-to-SQLite seed loading library
//!
//! This library converts a small, fixed subset of PostgreSQL syntax into
//! SQLite syntax and bulk-loads directories of seed scripts into a local
//! SQLite database, isolating per-file failures from the rest of the batch.

pub mod convert;
pub mod db;
pub mod error;
pub mod loader;
pub mod schema;

pub use convert::convert;
pub use error::{Result, SeedError};
pub use loader::{BatchReport, FileOutcome, LoaderConfig, SeedLoader, SeedOutcome};
pub use schema::TableStat;
