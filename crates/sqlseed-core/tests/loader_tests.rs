// Integration tests for the seed batch loader
use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use sqlseed_core::{db, schema, LoaderConfig, SeedError, SeedLoader};
use tempfile::TempDir;

const SCHEMA: &str = "\
CREATE TABLE log (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL);
CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, active INTEGER NOT NULL DEFAULT 0);
";

/// Create a schema-initialized database and an empty seed directory.
fn setup() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();

    let schema_path = dir.path().join("schema.sql");
    fs::write(&schema_path, SCHEMA).unwrap();

    let db_path = dir.path().join("test.db");
    schema::initialize(&db_path, &schema_path, false).unwrap();

    let seed_dir = dir.path().join("seed");
    fs::create_dir(&seed_dir).unwrap();

    (dir, db_path, seed_dir)
}

fn log_names(db_path: &PathBuf) -> Vec<String> {
    let conn = db::open(db_path, false).unwrap();
    let mut stmt = conn
        .prepare("SELECT name FROM log ORDER BY id")
        .unwrap();
    let names = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap();
    names
}

#[test]
fn test_files_execute_in_lexicographic_order() {
    let (_dir, db_path, seed_dir) = setup();

    // Written out of order on purpose
    fs::write(seed_dir.join("b.sql"), "INSERT INTO log (name) VALUES ('b');").unwrap();
    fs::write(seed_dir.join("a.sql"), "INSERT INTO log (name) VALUES ('a');").unwrap();

    let loader = SeedLoader::new(LoaderConfig {
        db_path: db_path.clone(),
        seed_dir,
    });
    let report = loader.run().unwrap();

    assert_eq!(report.total(), 2);
    assert_eq!(report.failed(), 0);
    assert_eq!(log_names(&db_path), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_non_sql_files_ignored() {
    let (_dir, db_path, seed_dir) = setup();

    fs::write(seed_dir.join("a.sql"), "INSERT INTO log (name) VALUES ('a');").unwrap();
    fs::write(seed_dir.join("notes.txt"), "not sql").unwrap();

    let loader = SeedLoader::new(LoaderConfig { db_path, seed_dir });
    let report = loader.run().unwrap();

    assert_eq!(report.total(), 1);
}

#[test]
fn test_one_bad_file_does_not_block_the_rest() {
    let (_dir, db_path, seed_dir) = setup();

    fs::write(
        seed_dir.join("01_first.sql"),
        "INSERT INTO log (name) VALUES ('first');",
    )
    .unwrap();
    fs::write(
        seed_dir.join("02_bad.sql"),
        "INSERT INTO missing_table VALUES (1);",
    )
    .unwrap();
    fs::write(
        seed_dir.join("03_last.sql"),
        "INSERT INTO log (name) VALUES ('last');",
    )
    .unwrap();

    let loader = SeedLoader::new(LoaderConfig {
        db_path: db_path.clone(),
        seed_dir,
    });
    let report = loader.run().unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "02_bad.sql");
    assert!(failures[0].1.contains("missing_table"));

    // The valid files' effects committed despite the failure in between
    assert_eq!(
        log_names(&db_path),
        vec!["first".to_string(), "last".to_string()]
    );
}

#[test]
fn test_postgres_syntax_is_converted_before_execution() {
    let (_dir, db_path, seed_dir) = setup();

    fs::write(
        seed_dir.join("users.sql"),
        "INSERT INTO users (id, name, active) VALUES (1, 'amy'::text, true);",
    )
    .unwrap();

    let loader = SeedLoader::new(LoaderConfig {
        db_path: db_path.clone(),
        seed_dir,
    });
    let report = loader.run().unwrap();
    assert_eq!(report.failed(), 0);

    let conn = db::open(&db_path, false).unwrap();
    let active: i64 = conn
        .query_row("SELECT active FROM users WHERE id = 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(active, 1);
}

#[test]
fn test_missing_database_performs_no_writes() {
    let dir = tempfile::tempdir().unwrap();
    let seed_dir = dir.path().join("seed");
    fs::create_dir(&seed_dir).unwrap();
    fs::write(seed_dir.join("a.sql"), "INSERT INTO log (name) VALUES ('a');").unwrap();

    let db_path = dir.path().join("missing.db");
    let loader = SeedLoader::new(LoaderConfig {
        db_path: db_path.clone(),
        seed_dir,
    });

    let err = loader.run().unwrap_err();
    assert!(matches!(err, SeedError::DatabaseMissing(_)));
    // The read-write-only open mode means no empty database appears either
    assert!(!db_path.exists());
}

#[test]
fn test_missing_seed_directory() {
    let (_dir, db_path, seed_dir) = setup();
    fs::remove_dir(&seed_dir).unwrap();

    let loader = SeedLoader::new(LoaderConfig { db_path, seed_dir });
    let err = loader.run().unwrap_err();
    assert!(matches!(err, SeedError::SeedDirMissing(_)));
}

#[test]
fn test_empty_seed_directory() {
    let (_dir, db_path, seed_dir) = setup();

    let loader = SeedLoader::new(LoaderConfig { db_path, seed_dir });
    let err = loader.run().unwrap_err();
    assert!(matches!(err, SeedError::NoSeedFiles(_)));
}

#[test]
fn test_connection_released_after_run() {
    let (_dir, db_path, seed_dir) = setup();
    fs::write(seed_dir.join("a.sql"), "INSERT INTO log (name) VALUES ('a');").unwrap();

    let loader = SeedLoader::new(LoaderConfig {
        db_path: db_path.clone(),
        seed_dir,
    });
    loader.run().unwrap();

    // A fresh connection can immediately write, so no lock is left behind
    let conn = db::open(&db_path, false).unwrap();
    conn.execute("INSERT INTO log (name) VALUES ('after')", [])
        .unwrap();
}
