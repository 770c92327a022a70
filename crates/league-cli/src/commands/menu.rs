//! Input method menu, shown when no subcommand is given.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use league_core::{LeagueConfig, MatchResult};

use super::{ReportOptions, file, interactive, publish};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    StandardInput,
    MatchFile,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::StandardInput),
            "2" => Some(Self::MatchFile),
            _ => None,
        }
    }
}

/// Run the menu
pub fn run(config: &LeagueConfig, options: &ReportOptions) -> Result<()> {
    print_banner(options);

    let stdin = io::stdin();
    match select_and_collect(&mut stdin.lock(), config, options)? {
        Some(results) => publish(&results, config, options),
        None => {
            options.prompt("Invalid choice. Exiting.");
            Ok(())
        }
    }
}

fn print_banner(options: &ReportOptions) {
    for line in BANNER {
        options.prompt(line);
    }
}

const BANNER: [&str; 5] = [
    "Welcome to the League",
    "Please input team results",
    "Choose input method:",
    "1. Standard Input",
    "2. Match File",
];

/// Read the menu choice, then the match results from the chosen source.
///
/// Returns `None` for an unrecognised choice.
fn select_and_collect<R: BufRead>(
    input: &mut R,
    config: &LeagueConfig,
    options: &ReportOptions,
) -> Result<Option<Vec<MatchResult>>> {
    let choice = read_line(input)?.as_deref().and_then(MenuChoice::parse);

    let results = match choice {
        Some(MenuChoice::StandardInput) => {
            interactive::prompt_and_collect(input, &config.input.sentinel, options)?
        }
        Some(MenuChoice::MatchFile) => {
            options.prompt("Enter match file path:");
            let path = read_line(input)?.context("No match file path given")?;
            file::collect(&PathBuf::from(path.trim()))?
        }
        None => return Ok(None),
    };

    Ok(Some(results))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
