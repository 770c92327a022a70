use serde::Serialize;
use strum::IntoStaticStr;

use super::Match;

/// Result of a match, seen from team A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr)]
pub enum Outcome {
    #[strum(serialize = "A WIN")]
    WinA,
    #[strum(serialize = "B WIN")]
    WinB,
    #[strum(serialize = "DRAW")]
    Draw,
}

impl Outcome {
    pub fn of(game: &Match) -> Self {
        use std::cmp::Ordering;

        match game.team_a().score().cmp(&game.team_b().score()) {
            Ordering::Greater => Self::WinA,
            Ordering::Less => Self::WinB,
            Ordering::Equal => Self::Draw,
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
