use serde::{Deserialize, Serialize};

use crate::error::{AgentError, ConfigError};

/// One move in the game's action space, integer-coded in `[0, signs)`.
pub type Sign = u32;

/// Number of signs in classic rock-paper-scissors.
pub const DEFAULT_SIGNS: u32 = 3;

/// Episode length used when nothing else is configured.
pub const DEFAULT_EPISODE_STEPS: u32 = 1000;

pub const ROCK: Sign = 0;
pub const PAPER: Sign = 1;
pub const SCISSORS: Sign = 2;

/// What an agent sees before deciding.
///
/// `last_opponent_action` is absent exactly on step 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    pub step: u32,
    pub last_opponent_action: Option<Sign>,
}

impl Observation {
    /// Observation for the opening step of an episode.
    pub fn first() -> Self {
        Self {
            step: 0,
            last_opponent_action: None,
        }
    }

    /// Observation for a later step, carrying the opponent's previous move.
    pub fn after(step: u32, last_opponent_action: Sign) -> Self {
        Self {
            step,
            last_opponent_action: Some(last_opponent_action),
        }
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    /// The opponent's previous move.
    ///
    /// Fails when called on a step > 0 observation that lacks one; that is
    /// a defect in whoever built the observation, not in the agent.
    pub fn opponent_action(&self) -> Result<Sign, AgentError> {
        self.last_opponent_action
            .ok_or(AgentError::MissingOpponentAction { step: self.step })
    }
}

/// Game parameters, immutable for the duration of one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Size of the action space
    pub signs: u32,
    /// Number of simultaneous steps in one episode
    pub episode_steps: u32,
}

impl Configuration {
    pub fn new(signs: u32, episode_steps: u32) -> Result<Self, ConfigError> {
        let config = Self {
            signs,
            episode_steps,
        };
        config.validate()?;
        Ok(config)
    }

    /// Classic three-sign game with the given episode length.
    pub fn classic(episode_steps: u32) -> Result<Self, ConfigError> {
        Self::new(DEFAULT_SIGNS, episode_steps)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.signs < 2 {
            return Err(ConfigError::TooFewSigns(self.signs));
        }
        if self.episode_steps == 0 {
            return Err(ConfigError::NoEpisodeSteps);
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, sign: Sign) -> bool {
        sign < self.signs
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            signs: DEFAULT_SIGNS,
            episode_steps: DEFAULT_EPISODE_STEPS,
        }
    }
}

/// Human-readable label for a sign; falls back to the number past scissors.
pub fn sign_name(sign: Sign) -> String {
    match sign {
        ROCK => "rock".to_string(),
        PAPER => "paper".to_string(),
        SCISSORS => "scissors".to_string(),
        other => format!("sign{other}"),
    }
}
