use std::fmt;

use serde::Serialize;

/// One side of a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TeamScore {
    name: String,
    score: u32,
}

impl TeamScore {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Team name. May be empty when the segment held nothing but a score.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl fmt::Display for TeamScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TeamScore::new("FC Awesome", 0).to_string(), "FC Awesome 0");
    }

    #[test]
    fn test_empty_name_is_kept() {
        let side = TeamScore::new("", 1);
        assert_eq!(side.name(), "");
        assert_eq!(side.score(), 1);
    }
}
