//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "sqlseed")]
#[command(author, version, about = "PostgreSQL-to-SQLite seed loader")]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load seed files into an existing database
    Seed {
        /// Path to the SQLite database file
        #[arg(long, env = "SQLSEED_DB", value_name = "FILE")]
        db: Option<PathBuf>,

        /// Directory containing .sql seed files
        #[arg(long = "seed-dir", env = "SQLSEED_SEED_DIR", value_name = "DIR")]
        seed_dir: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Create a database from a schema file, then optionally seed it
    Init {
        /// Path to the SQLite database file to create
        #[arg(long, env = "SQLSEED_DB", value_name = "FILE")]
        db: Option<PathBuf>,

        /// Schema SQL file applied to the new database
        #[arg(long, env = "SQLSEED_SCHEMA", value_name = "FILE")]
        schema: Option<PathBuf>,

        /// Seed directory loaded after the schema
        #[arg(long = "seed-dir", env = "SQLSEED_SEED_DIR", value_name = "DIR")]
        seed_dir: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Recreate the database if it already exists
        #[arg(long)]
        force: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List tables and row counts in a database
    Tables {
        /// Path to the SQLite database file
        #[arg(long, env = "SQLSEED_DB", value_name = "FILE")]
        db: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Convert a PostgreSQL script and print the SQLite text (for debugging)
    Convert {
        /// SQL file to convert
        file: PathBuf,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
}
