//! Error taxonomy shared by every crate in the arena.

use thiserror::Error;

use crate::types::Sign;

/// Invalid game or tournament parameters, detected before any match runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("signs must be at least 2 (got {0})")]
    TooFewSigns(u32),
    #[error("episode must have at least one step")]
    NoEpisodeSteps,
    #[error("roster needs at least 2 agents (got {0})")]
    RosterTooSmall(usize),
    #[error("agent name `{0}` appears more than once in the roster")]
    DuplicateName(String),
}

/// Failure raised from inside `Agent::decide`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("observation for step {step} carries no opponent action")]
    MissingOpponentAction { step: u32 },
}

/// Failure of the game evaluator or of an agent it drove.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluatorError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("agent `{agent}` failed at step {step}: {source}")]
    Agent {
        agent: String,
        step: u32,
        #[source]
        source: AgentError,
    },
    #[error("agent `{agent}` returned sign {sign} at step {step}, outside [0, {signs})")]
    ContractViolation {
        agent: String,
        step: u32,
        sign: Sign,
        signs: u32,
    },
    #[error(
        "evaluator reported {left_wins}-{right_wins} for an episode of {episode_steps} steps"
    )]
    InconsistentResult {
        left_wins: u32,
        right_wins: u32,
        episode_steps: u32,
    },
    #[error("evaluator failed: {0}")]
    Backend(String),
}
