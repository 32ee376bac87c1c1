//! Schema initialization and database inspection

use std::fs;
use std::path::Path;

use rusqlite::Connection;
use serde::Serialize;

use crate::db;
use crate::error::{Result, SeedError};

/// Name and row count of one user table.
#[derive(Debug, Clone, Serialize)]
pub struct TableStat {
    pub name: String,
    pub rows: i64,
}

/// Execute a schema file against an open connection.
///
/// The schema file is expected to already be written in SQLite syntax, so
/// it is executed verbatim, without dialect conversion.
pub fn apply_schema(conn: &Connection, path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(SeedError::SchemaMissing(path.to_path_buf()));
    }

    let sql = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    conn.execute_batch(&sql)?;

    tracing::info!(schema = %path.display(), "schema applied");
    Ok(())
}

/// Create a fresh database from a schema file.
///
/// Refuses to touch an existing database unless `force` is set, in which
/// case the old file is removed first. The connection is closed before
/// returning; seeding opens its own.
pub fn initialize(db_path: &Path, schema_path: &Path, force: bool) -> Result<()> {
    // Checked up front so a bad schema path never creates or removes a
    // database file.
    if !schema_path.is_file() {
        return Err(SeedError::SchemaMissing(schema_path.to_path_buf()));
    }

    if db_path.is_file() {
        if !force {
            return Err(SeedError::DatabaseExists(db_path.to_path_buf()));
        }
        fs::remove_file(db_path).map_err(|source| SeedError::Io {
            path: db_path.to_path_buf(),
            source,
        })?;
        tracing::info!(db = %db_path.display(), "removed existing database");
    }

    let conn = db::open(db_path, true)?;
    apply_schema(&conn, schema_path)
}

/// List user tables with their row counts, sorted by name.
pub fn table_stats(conn: &Connection) -> Result<Vec<TableStat>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let names: Vec<String> = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<_>>()?;

    let mut stats = Vec::with_capacity(names.len());
    for name in names {
        let rows: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM \"{name}\""), [], |row| {
                row.get(0)
            })?;
        stats.push(TableStat { name, rows });
    }
    Ok(stats)
}
