//! Match file input.

use std::path::Path;

use anyhow::{Context, Result};
use league_core::{LeagueConfig, MatchParser, MatchResult, StreamSource};
use tracing::info;

use super::{ReportOptions, publish};

/// Run the file command
pub fn run(path: &Path, config: &LeagueConfig, options: &ReportOptions) -> Result<()> {
    let results = collect(path)?;
    publish(&results, config, options)
}

/// Parse every line of the match file at `path`.
pub fn collect(path: &Path) -> Result<Vec<MatchResult>> {
    let mut source = StreamSource::open(path)
        .with_context(|| format!("Error reading match file {}", path.display()))?;

    let mut parser = MatchParser::new();
    let lines = parser.consume(&mut source)?;
    info!(
        "Read {} lines from {}, {} skipped",
        lines,
        path.display(),
        parser.rejected().len()
    );

    Ok(parser.into_results())
}
