//! SQLite connection handling

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

/// Open a SQLite database at `path`.
///
/// With `create = false` the file must already exist; a typo in the path
/// then fails the open instead of silently materializing an empty database.
/// Foreign key enforcement is switched on for every connection.
pub fn open(path: &Path, create: bool) -> Result<Connection> {
    let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    if create {
        flags |= OpenFlags::SQLITE_OPEN_CREATE;
    }

    let conn = Connection::open_with_flags(path, flags)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;

    tracing::debug!(path = %path.display(), "sqlite connection opened");
    Ok(conn)
}
