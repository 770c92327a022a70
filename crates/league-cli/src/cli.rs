//! CLI argument definitions for league.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use league_core::ExportFormat;

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "League standings calculator", version)]
pub struct Args {
    /// Load league configuration from a TOML file
    #[arg(long, value_name = "FILE", env = "LEAGUE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, short, value_enum, default_value_t = ReportFormat::Text, global = true)]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, short, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Without a subcommand, a menu asks for the input method
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Tsv,
    Json,
}

impl From<ReportFormat> for ExportFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => Self::Text,
            ReportFormat::Tsv => Self::Tsv,
            ReportFormat::Json => Self::Json,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Read match results from a file, one match per line
    File {
        /// Path to the match file
        path: PathBuf,
    },
    /// Type match results, ending with the sentinel line
    Interactive,
}
