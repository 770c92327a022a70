pub mod file;
pub mod interactive;
pub mod menu;

use std::path::PathBuf;

use anyhow::{Context, Result};
use league_core::{ExportFormat, LeagueConfig, MatchResult, aggregate, write_report};
use tracing::debug;

/// Where and how the standings report is written.
pub struct ReportOptions {
    pub format: ExportFormat,
    pub output: Option<PathBuf>,
}

impl ReportOptions {
    /// Progress lines would corrupt machine-readable output on stdout.
    fn show_progress(&self) -> bool {
        self.format == ExportFormat::Text || self.output.is_some()
    }

    /// Print a prompt or banner line, on stderr when stdout carries the report.
    fn prompt(&self, line: &str) {
        if self.show_progress() {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    }
}

/// Aggregate `results` and emit the standings report.
pub fn publish(
    results: &[MatchResult],
    config: &LeagueConfig,
    options: &ReportOptions,
) -> Result<()> {
    let progress = options.show_progress();
    if progress {
        println!("Processing {} match results...", results.len());
    }

    let standings = aggregate(results, &config.scoring);
    debug!("{} teams in standings", standings.len());
    let report = options.format.render(&standings.ranked())?;

    match &options.output {
        Some(path) => {
            write_report(path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Standings written to {}", path.display());
        }
        None => {
            if progress {
                println!();
            }
            print!("{}", report);
        }
    }

    if progress {
        println!("Processing complete!");
    }
    Ok(())
}
