//! Output formatting

use sqlseed_core::{BatchReport, SeedOutcome, TableStat};

use crate::args::OutputFormat;

/// Output formatter for seed run reports and table listings
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Print a seed run report in the configured format
    pub fn print_report(&self, report: &BatchReport) {
        match self.format {
            OutputFormat::Human => self.print_report_human(report),
            OutputFormat::Json => self.print_report_json(report),
        }
    }

    fn print_report_human(&self, report: &BatchReport) {
        for entry in &report.outcomes {
            match &entry.outcome {
                SeedOutcome::Applied => {
                    if !self.quiet {
                        println!("\x1b[32mok\x1b[0m {}", entry.file);
                    }
                }
                SeedOutcome::Failed(message) => {
                    println!("\x1b[31merror\x1b[0m {}: {}", entry.file, message);
                }
            }
        }

        if !self.quiet {
            println!();
        }
        println!(
            "Loaded {} of {} seed file(s), {} failed",
            report.succeeded(),
            report.total(),
            report.failed()
        );
    }

    fn print_report_json(&self, report: &BatchReport) {
        let output = serde_json::json!({
            "total": report.total(),
            "succeeded": report.succeeded(),
            "failed": report.failed(),
            "files": report.outcomes,
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    }

    /// Print table statistics in the configured format
    pub fn print_tables(&self, stats: &[TableStat]) {
        match self.format {
            OutputFormat::Human => {
                if stats.is_empty() {
                    println!("No tables found");
                    return;
                }
                for stat in stats {
                    println!("{}: {} row(s)", stat.name, stat.rows);
                }
            }
            OutputFormat::Json => {
                let output = serde_json::json!({ "tables": stats });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            }
        }
    }
}
