use std::fmt;

use serde::Serialize;

use super::TeamScore;

/// A single played match. The A/B order only affects display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    team_a: TeamScore,
    team_b: TeamScore,
}

impl Match {
    pub fn new(team_a: TeamScore, team_b: TeamScore) -> Self {
        Self { team_a, team_b }
    }

    pub fn team_a(&self) -> &TeamScore {
        &self.team_a
    }

    pub fn team_b(&self) -> &TeamScore {
        &self.team_b
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.team_a, self.team_b)
    }
}

/// A parsed match, as consumed by the standings aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MatchResult {
    game: Match,
}

impl MatchResult {
    pub fn new(game: Match) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn into_match(self) -> Match {
        self.game
    }
}

impl From<Match> for MatchResult {
    fn from(game: Match) -> Self {
        Self::new(game)
    }
}
