//! Error types for seeding operations
//!
//! Only batch-fatal conditions are represented here. A failure executing one
//! seed file is not an error at this level; it is recorded in that file's
//! [`FileOutcome`](crate::loader::FileOutcome) and the batch continues.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeedError>;

#[derive(Debug, Error)]
pub enum SeedError {
    /// The target database file must exist before seeding; seeding assumes
    /// the schema has already been applied by `init`.
    #[error("database file not found: {} (run `sqlseed init` first)", .0.display())]
    DatabaseMissing(PathBuf),

    /// `init` refuses to overwrite an existing database unless forced.
    #[error("database file already exists: {} (use --force to recreate)", .0.display())]
    DatabaseExists(PathBuf),

    #[error("seed directory not found: {}", .0.display())]
    SeedDirMissing(PathBuf),

    #[error("no .sql files found in {}", .0.display())]
    NoSeedFiles(PathBuf),

    #[error("schema file not found: {}", .0.display())]
    SchemaMissing(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed path pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// The batch-wide commit failed; the transaction was rolled back and no
    /// seed data from this run is visible.
    #[error("failed to commit seed batch: {0}")]
    CommitFailed(#[source] rusqlite::Error),
}
