//! Export formats for the ranked standings.

use std::fs;
use std::path::Path;

use serde::Serialize;
use strum::{EnumString, IntoStaticStr};

use crate::error::Result;
use crate::standings::{StandingsEntry, render_report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    #[default]
    Text,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn render(&self, entries: &[StandingsEntry]) -> Result<String> {
        match self {
            Self::Text => Ok(render_report(entries)),
            Self::Tsv => Ok(format_standings_tsv(entries)),
            Self::Json => format_standings_json(entries),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize)]
struct RankedRow<'a> {
    rank: usize,
    team: &'a str,
    points: u32,
}

fn ranked_rows(entries: &[StandingsEntry]) -> impl Iterator<Item = RankedRow<'_>> {
    entries.iter().enumerate().map(|(i, entry)| RankedRow {
        rank: i + 1,
        team: &entry.team,
        points: entry.points,
    })
}

pub fn format_tsv_header() -> String {
    ["rank", "team", "points"].join("\t")
}

/// Tab-separated standings with a header row. Rank is the 1-based position.
pub fn format_standings_tsv(entries: &[StandingsEntry]) -> String {
    let mut lines = vec![format_tsv_header()];
    lines.extend(
        ranked_rows(entries).map(|row| format!("{}\t{}\t{}", row.rank, row.team, row.points)),
    );
    lines.join("\n") + "\n"
}

/// Pretty-printed JSON array of `{rank, team, points}` objects.
pub fn format_standings_json(entries: &[StandingsEntry]) -> Result<String> {
    let rows: Vec<RankedRow<'_>> = ranked_rows(entries).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Write a rendered report to `path`, replacing any existing file.
pub fn write_report<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}
