//! # league-core
//!
//! Core library for the league standings tool.
//!
//! This crate provides:
//! - Match data types (`TeamScore`, `Match`, `MatchResult`)
//! - Line parsing with trailing-score extraction
//! - Interactive and file line sources
//! - Points aggregation, ranking and report export

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod source;
pub mod standings;

pub use config::{InputConfig, LeagueConfig, ScoringRules};
pub use error::{Error, Result};
pub use export::{
    ExportFormat, format_standings_json, format_standings_tsv, format_tsv_header, write_report,
};
pub use model::{Match, MatchResult, Outcome, TeamScore};
pub use parser::{EXPECTED_FORMAT, MatchParser, extract_team_score, parse_match};
pub use source::{DEFAULT_SENTINEL, LineSource, PromptSource, StreamSource};
pub use standings::{REPORT_HEADER, Standings, StandingsEntry, aggregate, render_report};
