//! League configuration.
//!
//! Loaded from a TOML file; every key is optional and falls back to the
//! standard league rules:
//!
//! ```toml
//! [scoring]
//! win = 3
//! draw = 1
//! loss = 0
//!
//! [input]
//! sentinel = "done"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::source::DEFAULT_SENTINEL;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    pub scoring: ScoringRules,
    pub input: InputConfig,
}

/// Points awarded per match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Line that ends interactive input (case-insensitive).
    pub sentinel: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl LeagueConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))?;
        if config.input.sentinel.is_empty() {
            return Err(Error::ConfigParseError(
                "input.sentinel must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}
