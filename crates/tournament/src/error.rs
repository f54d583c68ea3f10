use agents::RosterError;
use rps_core::{ConfigError, EvaluatorError};
use thiserror::Error;

/// Everything that can abort a tournament run.
///
/// Nothing is recovered below the caller of the tournament: the first
/// error ends the run and no partial table is returned.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error("match {left} vs {right} failed: {source}")]
    Match {
        left: String,
        right: String,
        #[source]
        source: EvaluatorError,
    },
    #[error("agent `{0}` is not in the results table")]
    UnknownAgent(String),
    #[error("agent `{0}` was left poisoned by a panicked match")]
    Poisoned(String),
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to (de)serialize results: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
