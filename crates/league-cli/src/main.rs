mod cli;
mod commands;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use commands::ReportOptions;
use league_core::LeagueConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Warnings (skipped lines) stay visible unless RUST_LOG says otherwise
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("league_cli=warn,league_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(args.config.as_deref());
    let options = ReportOptions {
        format: args.format.into(),
        output: args.output,
    };

    match args.command {
        Some(Command::File { path }) => commands::file::run(&path, &config, &options),
        Some(Command::Interactive) => commands::interactive::run(&config, &options),
        None => commands::menu::run(&config, &options),
    }
}

fn load_config(path: Option<&Path>) -> LeagueConfig {
    let Some(path) = path else {
        return LeagueConfig::default();
    };

    match LeagueConfig::load(path) {
        Ok(c) => {
            info!("Loaded config from {:?}", path);
            c
        }
        Err(e) => {
            warn!("Failed to load config {:?}: {}, using defaults", path, e);
            LeagueConfig::default()
        }
    }
}
