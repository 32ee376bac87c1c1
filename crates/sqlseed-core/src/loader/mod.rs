//! Seed batch loading
//!
//! Discovers `.sql` files in a directory, converts each one to SQLite
//! syntax, and executes them in lexicographic order against a single
//! connection. One transaction spans the whole batch: a failing file is
//! recorded and skipped, and everything that succeeded commits together at
//! the end.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, Transaction};
use serde::Serialize;

use crate::convert::convert;
use crate::db;
use crate::error::{Result, SeedError};

/// Paths the loader operates on.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// SQLite database file; must already exist (schema applied by `init`).
    pub db_path: PathBuf,
    /// Directory scanned for `*.sql` seed files.
    pub seed_dir: PathBuf,
}

/// Outcome of one seed file's execution attempt.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "lowercase")]
pub enum SeedOutcome {
    Applied,
    Failed(String),
}

impl SeedOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SeedOutcome::Failed(_))
    }
}

/// One discovered seed file and what happened to it.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub file: String,
    #[serde(flatten)]
    pub outcome: SeedOutcome,
}

/// Aggregate result of a seed run, one entry per discovered file.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.total() - self.failed()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome.is_failure())
            .count()
    }

    /// Iterate `(file, error message)` for the failed files.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.outcome {
            SeedOutcome::Failed(msg) => Some((o.file.as_str(), msg.as_str())),
            SeedOutcome::Applied => None,
        })
    }
}

/// Batch loader for a directory of seed files.
pub struct SeedLoader {
    config: LoaderConfig,
}

impl SeedLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// List the seed files, sorted lexicographically ascending so the load
    /// order is reproducible across filesystems.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        if !self.config.seed_dir.is_dir() {
            return Err(SeedError::SeedDirMissing(self.config.seed_dir.clone()));
        }

        let pattern = format!("{}/*.sql", self.config.seed_dir.display());
        let mut files: Vec<PathBuf> = glob::glob(&pattern)?.flatten().collect();
        files.sort();

        if files.is_empty() {
            return Err(SeedError::NoSeedFiles(self.config.seed_dir.clone()));
        }
        Ok(files)
    }

    /// Run the whole batch and report per-file outcomes.
    ///
    /// Preconditions (seed directory present and non-empty, database file
    /// present) are checked before any connection is opened, so a failed
    /// precondition performs zero writes. The connection is released on
    /// every exit path when it drops at the end of this scope.
    pub fn run(&self) -> Result<BatchReport> {
        let files = self.discover()?;

        if !self.config.db_path.is_file() {
            return Err(SeedError::DatabaseMissing(self.config.db_path.clone()));
        }

        let mut conn = db::open(&self.config.db_path, false)?;
        self.execute_batch(&mut conn, &files)
    }

    fn execute_batch(&self, conn: &mut Connection, files: &[PathBuf]) -> Result<BatchReport> {
        // Dropping the transaction without commit rolls back, so a fatal
        // exit below this point never leaves a partial commit pending.
        let tx = conn.transaction()?;

        let mut outcomes = Vec::with_capacity(files.len());
        for path in files {
            let file = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            let outcome = match Self::run_file(&tx, path) {
                Ok(()) => {
                    tracing::info!(%file, "seed file applied");
                    SeedOutcome::Applied
                }
                Err(message) => {
                    tracing::warn!(%file, error = %message, "seed file failed");
                    SeedOutcome::Failed(message)
                }
            };
            outcomes.push(FileOutcome { file, outcome });
        }

        tx.commit().map_err(SeedError::CommitFailed)?;
        Ok(BatchReport { outcomes })
    }

    /// Execute one seed file. Any failure is scoped to this file: it is
    /// returned as a message for the file's outcome, never propagated.
    fn run_file(tx: &Transaction<'_>, path: &Path) -> std::result::Result<(), String> {
        let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let sql = convert(&raw);
        tx.execute_batch(&sql).map_err(|e| e.to_string())
    }
}
