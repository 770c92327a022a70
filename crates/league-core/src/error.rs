use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid format, please use: TeamA ScoreA, TeamB ScoreB (found {segments} segment(s) in {line:?})")]
    Format { line: String, segments: usize },

    #[error("Invalid score format: {0:?}")]
    MalformedScore(String),

    #[error("Score out of range: {0:?}")]
    ScoreOverflow(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the batch may continue after this error.
    ///
    /// Only a wrong segment count is skipped; a bad score aborts the batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
