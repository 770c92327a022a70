use std::fmt::Write as _;

use super::StandingsEntry;

pub const REPORT_HEADER: &str = "Team Standings:";

/// Render the standings report: the header, then `<team>: <points> pts`
/// per entry in the given order.
pub fn render_report(entries: &[StandingsEntry]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", REPORT_HEADER);
    for entry in entries {
        let _ = writeln!(output, "{}: {} pts", entry.team, entry.points);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_report() {
        let entries = vec![
            StandingsEntry {
                team: "Lions".to_string(),
                points: 4,
            },
            StandingsEntry {
                team: "Snakes".to_string(),
                points: 0,
            },
        ];
        assert_eq!(
            render_report(&entries),
            "Team Standings:\nLions: 4 pts\nSnakes: 0 pts\n"
        );
    }

    #[test]
    fn test_render_empty_report() {
        assert_eq!(render_report(&[]), "Team Standings:\n");
    }

    #[test]
    fn test_render_empty_team_name() {
        let entries = [StandingsEntry {
            team: String::new(),
            points: 1,
        }];
        assert_eq!(render_report(&entries), "Team Standings:\n: 1 pts\n");
    }
}
