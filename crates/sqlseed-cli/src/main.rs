//! sqlseed CLI - initialize and seed SQLite databases from PostgreSQL scripts

mod args;
mod config;
mod output;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use sqlseed_core::{convert, db, schema, LoaderConfig, SeedLoader};

use crate::args::{Args, Command, OutputFormat};
use crate::config::Config;
use crate::output::OutputFormatter;

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing; -v raises the level from the WARN default
    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match run(args) {
        Ok(has_failures) => {
            if has_failures {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let quiet = args.quiet;

    match args.command {
        Command::Seed {
            db,
            seed_dir,
            config: config_path,
            format,
        } => {
            let config = load_config(&config_path)?.merge_with_args(&db, &seed_dir, &None, &format);

            let loader_config = LoaderConfig {
                db_path: require_db(&config)?,
                seed_dir: require_seed_dir(&config)?,
            };

            let report = SeedLoader::new(loader_config).run().into_diagnostic()?;

            let formatter = OutputFormatter::new(output_format(&config), quiet);
            formatter.print_report(&report);

            Ok(report.failed() > 0)
        }

        Command::Init {
            db,
            schema: schema_file,
            seed_dir,
            config: config_path,
            force,
            format,
        } => {
            let config =
                load_config(&config_path)?.merge_with_args(&db, &seed_dir, &schema_file, &format);

            let db_path = require_db(&config)?;
            let Some(schema_path) = config.schema.as_ref().map(PathBuf::from) else {
                miette::bail!(
                    "No schema file specified. Use --schema, SQLSEED_SCHEMA, or configure in sqlseed.toml"
                );
            };

            schema::initialize(&db_path, &schema_path, force).into_diagnostic()?;
            if !quiet {
                println!("Database initialized: {}", db_path.display());
            }

            // Seed right after the schema when a seed directory is configured
            if let Some(seed_dir) = config.seed_dir.as_ref().map(PathBuf::from) {
                let loader_config = LoaderConfig { db_path, seed_dir };
                let report = SeedLoader::new(loader_config).run().into_diagnostic()?;

                let formatter = OutputFormatter::new(output_format(&config), quiet);
                formatter.print_report(&report);

                return Ok(report.failed() > 0);
            }

            Ok(false)
        }

        Command::Tables {
            db,
            config: config_path,
            format,
        } => {
            let config = load_config(&config_path)?.merge_with_args(&db, &None, &None, &format);

            let db_path = require_db(&config)?;
            if !db_path.is_file() {
                miette::bail!("Database file not found: {}", db_path.display());
            }

            let conn = db::open(&db_path, false).into_diagnostic()?;
            let stats = schema::table_stats(&conn).into_diagnostic()?;

            let formatter = OutputFormatter::new(output_format(&config), quiet);
            formatter.print_tables(&stats);

            Ok(false)
        }

        Command::Convert { file } => {
            let content = fs::read_to_string(&file).into_diagnostic()?;
            print!("{}", convert(&content));
            Ok(false)
        }
    }
}

fn load_config(path: &Option<PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        Config::from_file(path)
    } else {
        Ok(Config::find_and_load()?.unwrap_or_default())
    }
}

fn require_db(config: &Config) -> Result<PathBuf> {
    match &config.db {
        Some(db) => Ok(PathBuf::from(db)),
        None => miette::bail!(
            "No database path specified. Use --db, SQLSEED_DB, or configure in sqlseed.toml"
        ),
    }
}

fn require_seed_dir(config: &Config) -> Result<PathBuf> {
    match &config.seed_dir {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => miette::bail!(
            "No seed directory specified. Use --seed-dir, SQLSEED_SEED_DIR, or configure in sqlseed.toml"
        ),
    }
}

fn output_format(config: &Config) -> OutputFormat {
    match config.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Human,
    }
}
