use crate::error::{Error, Result};
use crate::model::{Match, TeamScore};

use super::DELIMITER;

/// Parse one line into a [`Match`].
///
/// Returns [`Error::Format`] unless the line splits into exactly two
/// segments, and [`Error::MalformedScore`] / [`Error::ScoreOverflow`] when a
/// segment's score cannot be read.
pub fn parse_match(line: &str) -> Result<Match> {
    let segments: Vec<&str> = line.split(DELIMITER).collect();
    let [first, second] = segments.as_slice() else {
        return Err(Error::Format {
            line: line.to_string(),
            segments: segments.len(),
        });
    };

    let team_a = extract_team_score(first)?;
    let team_b = extract_team_score(second)?;

    Ok(Match::new(team_a, team_b))
}

/// Split a segment into team name and score.
///
/// The score is the longest run of ASCII digits at the end of the segment,
/// ignoring trailing whitespace. Whatever precedes it, trimmed, is the name.
pub fn extract_team_score(segment: &str) -> Result<TeamScore> {
    let body = segment.trim_end();
    let name_part = body.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &body[name_part.len()..];

    if digits.is_empty() {
        return Err(Error::MalformedScore(segment.to_string()));
    }

    // Digits only, so parsing can fail on overflow alone.
    let score = digits
        .parse::<u32>()
        .map_err(|_| Error::ScoreOverflow(segment.to_string()))?;

    Ok(TeamScore::new(name_part.trim(), score))
}
