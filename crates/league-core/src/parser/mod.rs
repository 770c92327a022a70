//! Match line parsing.
//!
//! A line holds two comma-separated segments, each ending in a score:
//! `Lions 3, Snakes 1`. Scores are recovered from the trailing digit run of
//! each segment, so team names may contain spaces, punctuation and digits
//! (`Team99 3`).
//!
//! Two failure classes exist and they are handled differently:
//! - a line without exactly two segments is skipped with a warning
//! - a segment without a trailing score aborts the batch

mod batch;
mod line;

pub use batch::*;
pub use line::*;

/// Layout shown to the user when a line is rejected.
pub const EXPECTED_FORMAT: &str = "TeamA ScoreA, TeamB ScoreB";

/// Separator between the two sides of a match.
pub const DELIMITER: char = ',';
