use tracing::info;

use crate::config::ScoringRules;
use crate::model::{MatchResult, Outcome};

use super::Standings;

/// Build a fresh points table from `results`.
pub fn aggregate(results: &[MatchResult], rules: &ScoringRules) -> Standings {
    let mut standings = Standings::new();

    for result in results {
        let game = result.game();
        let (team_a, team_b) = (game.team_a().name(), game.team_b().name());
        let outcome = Outcome::of(game);

        match outcome {
            Outcome::WinA => {
                standings.award(team_a, rules.win);
                standings.award(team_b, rules.loss);
            }
            Outcome::WinB => {
                standings.award(team_b, rules.win);
                standings.award(team_a, rules.loss);
            }
            Outcome::Draw => {
                standings.award(team_a, rules.draw);
                standings.award(team_b, rules.draw);
            }
        }

        info!(outcome = outcome.short_name(), "Processed: {}", game);
    }

    standings
}
