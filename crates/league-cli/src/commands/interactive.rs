//! Interactive input on stdin.

use std::io::{self, BufRead};

use anyhow::Result;
use league_core::{EXPECTED_FORMAT, LeagueConfig, MatchParser, MatchResult, PromptSource};

use super::{ReportOptions, publish};

/// Run the interactive command
pub fn run(config: &LeagueConfig, options: &ReportOptions) -> Result<()> {
    let stdin = io::stdin();
    let results = prompt_and_collect(stdin.lock(), &config.input.sentinel, options)?;
    publish(&results, config, options)
}

pub fn prompt_and_collect<R: BufRead>(
    reader: R,
    sentinel: &str,
    options: &ReportOptions,
) -> Result<Vec<MatchResult>> {
    options.prompt(&format!("Enter match results (format: {})", EXPECTED_FORMAT));
    options.prompt(&format!("Enter '{}' when finished", sentinel));
    collect(reader, sentinel)
}

/// Parse lines from `reader` until the sentinel or end of input.
pub fn collect<R: BufRead>(reader: R, sentinel: &str) -> Result<Vec<MatchResult>> {
    let mut source = PromptSource::with_sentinel(reader, sentinel);
    let mut parser = MatchParser::new();
    parser.consume(&mut source)?;
    Ok(parser.into_results())
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::ExportFormat;
    use std::io::Cursor;

    #[test]
    fn test_collect_until_sentinel() {
        let results = collect(
            Cursor::new("Lions 3,Snakes 1\nTarantulas 1,FC Awesome 0\ndone\n"),
            "done",
        )
        .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].game().team_a().score(), 1);
        assert_eq!(results[1].game().team_b().score(), 0);
    }

    #[test]
    fn test_collect_mixed_input() {
        let results = collect(
            Cursor::new("Lions 3,Snakes 1\nInvalid Line\nTarantulas 1,FC Awesome 0\nDone\n"),
            "done",
        )
        .unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_collect_parse_error() {
        let err = collect(Cursor::new("Lions X,Snakes 1\ndone\n"), "done").unwrap_err();
        assert!(err.to_string().contains("Invalid score format"));
    }

    #[test]
    fn test_prompt_and_collect_with_json_report() {
        let options = ReportOptions {
            format: ExportFormat::Json,
            output: None,
        };
        let results =
            prompt_and_collect(Cursor::new("Lions 3,Snakes 1\ndone\n"), "done", &options).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_collect_custom_sentinel() {
        let results = collect(Cursor::new("Lions 3,Snakes 1\nfin\nA 1,B 1\n"), "fin").unwrap();
        assert_eq!(results.len(), 1);
    }
}
