//! Match data types.
//!
//! - `TeamScore` - one side of a match: team name and goals scored
//! - `Match` - a pair of `TeamScore`s in input order
//! - `MatchResult` - a parsed match as handed to the standings aggregator
//! - `Outcome` - which side won, if either

mod matches;
mod outcome;
mod team_score;

pub use matches::*;
pub use outcome::*;
pub use team_score::*;
