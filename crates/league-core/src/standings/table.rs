use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

/// One row of the ranked standings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StandingsEntry {
    pub team: String,
    pub points: u32,
}

impl StandingsEntry {
    /// Ranking order: most points first, then team name ascending.
    ///
    /// Names compare byte-wise, so uppercase sorts before lowercase.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| self.team.cmp(&other.team))
    }
}

/// Accumulated points per team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    points: HashMap<String, u32>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` to `team`, creating the entry if needed.
    ///
    /// Awarding zero still records the team.
    pub fn award(&mut self, team: &str, points: u32) {
        match self.points.get_mut(team) {
            Some(total) => *total = total.saturating_add(points),
            None => {
                self.points.insert(team.to_string(), points);
            }
        }
    }

    pub fn points(&self, team: &str) -> Option<u32> {
        self.points.get(team).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All teams in ranking order.
    pub fn ranked(&self) -> Vec<StandingsEntry> {
        let mut entries: Vec<StandingsEntry> = self
            .points
            .iter()
            .map(|(team, &points)| StandingsEntry {
                team: team.clone(),
                points,
            })
            .collect();
        entries.sort_by(StandingsEntry::rank_cmp);
        entries
    }
}

impl FromIterator<(String, u32)> for Standings {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut standings = Self::new();
        for (team, points) in iter {
            standings.award(&team, points);
        }
        standings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[StandingsEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.team.as_str()).collect()
    }

    #[test]
    fn test_award_upserts() {
        let mut standings = Standings::new();
        standings.award("Lions", 3);
        standings.award("Lions", 1);
        standings.award("Snakes", 0);

        assert_eq!(standings.points("Lions"), Some(4));
        assert_eq!(standings.points("Snakes"), Some(0));
        assert_eq!(standings.points("Tigers"), None);
        assert_eq!(standings.len(), 2);
    }

    #[test]
    fn test_award_saturates() {
        let mut standings = Standings::new();
        standings.award("Lions", u32::MAX);
        standings.award("Lions", 1);
        assert_eq!(standings.points("Lions"), Some(u32::MAX));
    }

    #[test]
    fn test_ranked_by_points_then_name() {
        let standings: Standings = [
            ("Zebras".to_string(), 3),
            ("Beavers".to_string(), 3),
            ("Antelopes".to_string(), 3),
            ("Cougars".to_string(), 0),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            names(&standings.ranked()),
            ["Antelopes", "Beavers", "Zebras", "Cougars"]
        );
    }

    #[test]
    fn test_tie_break_is_case_sensitive() {
        let standings: Standings = [
            ("alpha".to_string(), 1),
            ("Beta".to_string(), 1),
            ("Alpha".to_string(), 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(names(&standings.ranked()), ["Alpha", "Beta", "alpha"]);
    }

    #[test]
    fn test_empty_name_sorts_first_among_equals() {
        let standings: Standings = [("Lions".to_string(), 1), (String::new(), 1)]
            .into_iter()
            .collect();
        assert_eq!(names(&standings.ranked()), ["", "Lions"]);
    }

    #[test]
    fn test_empty_standings() {
        let standings = Standings::new();
        assert!(standings.is_empty());
        assert!(standings.ranked().is_empty());
    }
}
