use tracing::{debug, warn};

use crate::error::Result;
use crate::model::MatchResult;
use crate::source::LineSource;

use super::{EXPECTED_FORMAT, parse_match};

/// Accumulates parsed matches across any number of input lines.
///
/// Results are kept in input order and are never cleared, so feeding a
/// second source appends to the first.
#[derive(Debug, Default)]
pub struct MatchParser {
    results: Vec<MatchResult>,
    rejected: Vec<String>,
}

impl MatchParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one line and keep the match.
    ///
    /// Lines with the wrong number of segments are logged and skipped.
    /// Score errors are returned to the caller and nothing is recorded.
    pub fn process_line(&mut self, line: &str) -> Result<()> {
        match parse_match(line) {
            Ok(game) => {
                debug!("Parsed match: {}", game);
                self.results.push(MatchResult::new(game));
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                warn!("Invalid format, please use: {} (line: {:?})", EXPECTED_FORMAT, line);
                self.rejected.push(line.to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Drain `source`, parsing every line it yields.
    ///
    /// Returns the number of lines read. Stops at the first score error,
    /// leaving the remaining lines unread.
    pub fn consume<S: LineSource + ?Sized>(&mut self, source: &mut S) -> Result<usize> {
        let mut count = 0;
        while let Some(line) = source.next_line()? {
            count += 1;
            self.process_line(&line)?;
        }
        debug!("Read {} lines, {} matches so far", count, self.results.len());
        Ok(count)
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<MatchResult> {
        self.results
    }

    /// Lines skipped for having the wrong number of segments.
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::TeamScore;

    #[test]
    fn test_new_parser_is_empty() {
        let parser = MatchParser::new();
        assert!(parser.results().is_empty());
        assert!(parser.rejected().is_empty());
    }

    #[test]
    fn test_process_valid_line() {
        let mut parser = MatchParser::new();
        parser.process_line("Lions 3,Snakes 1").unwrap();

        assert_eq!(parser.results().len(), 1);
        let game = parser.results()[0].game();
        assert_eq!(game.team_a(), &TeamScore::new("Lions", 3));
        assert_eq!(game.team_b(), &TeamScore::new("Snakes", 1));
        assert!(parser.rejected().is_empty());
    }

    #[test]
    fn test_accumulates_in_order() {
        let mut parser = MatchParser::new();
        parser.process_line("Lions 3,Snakes 1").unwrap();
        parser.process_line("Tarantulas 1,FC Awesome 0").unwrap();

        let names: Vec<&str> = parser
            .results()
            .iter()
            .map(|r| r.game().team_a().name())
            .collect();
        assert_eq!(names, ["Lions", "Tarantulas"]);
    }

    #[test]
    fn test_invalid_format_is_skipped() {
        let mut parser = MatchParser::new();
        parser.process_line("Lions 3,Snakes 1,Tigers 2").unwrap();
        parser.process_line("").unwrap();

        assert!(parser.results().is_empty());
        assert_eq!(parser.rejected(), ["Lions 3,Snakes 1,Tigers 2", ""]);
    }

    #[test]
    fn test_missing_score_propagates() {
        let mut parser = MatchParser::new();
        parser.process_line("Lions 3,Snakes 1").unwrap();

        let err = parser.process_line("Lions,Snakes 1").unwrap_err();
        assert!(matches!(err, Error::MalformedScore(_)));
        assert_eq!(parser.results().len(), 1);
        assert!(parser.rejected().is_empty());
    }

    #[test]
    fn test_into_results() {
        let mut parser = MatchParser::new();
        parser.process_line("Lions 1,FC Awesome 1").unwrap();
        let results = parser.into_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].game().to_string(), "Lions 1 - FC Awesome 1");
    }
}
