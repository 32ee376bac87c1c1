//! Configuration file handling

use miette::{IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for sqlseed
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// SQLite database file
    pub db: Option<String>,

    /// Directory containing seed files
    pub seed_dir: Option<String>,

    /// Schema SQL file (used by `init`)
    pub schema: Option<String>,

    /// Output format (human, json)
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).into_diagnostic()?;
        let config: Config = toml::from_str(&contents).into_diagnostic()?;
        Ok(config)
    }

    /// Try to find and load sqlseed.toml in current directory or parent directories
    pub fn find_and_load() -> Result<Option<Self>> {
        let mut current_dir = std::env::current_dir().into_diagnostic()?;

        loop {
            let config_path = current_dir.join("sqlseed.toml");
            if config_path.exists() {
                return Ok(Some(Self::from_file(&config_path)?));
            }

            // Try parent directory
            if !current_dir.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Merge CLI arguments into configuration
    /// CLI arguments take precedence over config file values
    pub fn merge_with_args(
        mut self,
        db: &Option<PathBuf>,
        seed_dir: &Option<PathBuf>,
        schema: &Option<PathBuf>,
        format: &Option<crate::args::OutputFormat>,
    ) -> Self {
        if db.is_some() {
            self.db = db.as_ref().map(|p| p.display().to_string());
        }

        if seed_dir.is_some() {
            self.seed_dir = seed_dir.as_ref().map(|p| p.display().to_string());
        }

        if schema.is_some() {
            self.schema = schema.as_ref().map(|p| p.display().to_string());
        }

        if let Some(fmt) = format {
            self.format = Some(format!("{:?}", fmt).to_lowercase());
        }

        self
    }
}
