//! Game rules and the evaluator seam.
//!
//! The tournament never plays steps itself: it hands two agents to a
//! [`GameEvaluator`] and gets back per-agent win counts. [`RpsEvaluator`]
//! is the in-process implementation of the extended rock-paper-scissors
//! rules; tests substitute scripted evaluators through the same trait.

use serde::{Deserialize, Serialize};

use crate::error::EvaluatorError;
use crate::types::{Configuration, Observation, Sign};
use crate::Agent;

/// Result of a single step from the left agent's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    LeftWins,
    RightWins,
    Draw,
}

/// Decide one step of extended rock-paper-scissors.
///
/// Sign `s + 1` always beats `s`; with an odd number of signs this wraps,
/// so `(s + 1) % signs` beats `s` for every sign and each sign beats
/// exactly half of the others.
pub fn outcome(left: Sign, right: Sign, signs: u32) -> Outcome {
    debug_assert!(left < signs && right < signs);
    let (l, r) = (i64::from(left), i64::from(right));
    let delta = if (l + r) % 2 == 0 { r - l } else { l - r };
    match delta.signum() {
        1 => Outcome::LeftWins,
        -1 => Outcome::RightWins,
        _ => Outcome::Draw,
    }
}

/// Win counts for one completed episode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeResult {
    pub left_wins: u32,
    pub right_wins: u32,
    pub draws: u32,
}

impl EpisodeResult {
    pub fn total_steps(&self) -> u64 {
        u64::from(self.left_wins) + u64::from(self.right_wins) + u64::from(self.draws)
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::LeftWins => self.left_wins += 1,
            Outcome::RightWins => self.right_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Anything that can play a full episode between two agents.
///
/// Implementations must be shareable across threads: the parallel
/// scheduler calls `run_episode` from several workers at once, each time
/// with a different, exclusively borrowed pair of agents.
pub trait GameEvaluator: Sync {
    fn run_episode(
        &self,
        left: &mut dyn Agent,
        right: &mut dyn Agent,
        config: &Configuration,
    ) -> Result<EpisodeResult, EvaluatorError>;
}

/// In-process evaluator for the extended rock-paper-scissors game.
#[derive(Debug, Clone, Copy, Default)]
pub struct RpsEvaluator;

impl RpsEvaluator {
    pub fn new() -> Self {
        Self
    }

    fn ask(
        agent: &mut dyn Agent,
        obs: &Observation,
        config: &Configuration,
    ) -> Result<Sign, EvaluatorError> {
        let sign = agent
            .decide(obs, config)
            .map_err(|source| EvaluatorError::Agent {
                agent: agent.name().to_string(),
                step: obs.step,
                source,
            })?;
        if !config.contains(sign) {
            return Err(EvaluatorError::ContractViolation {
                agent: agent.name().to_string(),
                step: obs.step,
                sign,
                signs: config.signs,
            });
        }
        Ok(sign)
    }
}

impl GameEvaluator for RpsEvaluator {
    fn run_episode(
        &self,
        left: &mut dyn Agent,
        right: &mut dyn Agent,
        config: &Configuration,
    ) -> Result<EpisodeResult, EvaluatorError> {
        config.validate()?;

        let mut result = EpisodeResult::default();
        let mut previous: Option<(Sign, Sign)> = None;

        for step in 0..config.episode_steps {
            let (left_obs, right_obs) = match previous {
                None => (Observation::first(), Observation::first()),
                Some((l, r)) => (Observation::after(step, r), Observation::after(step, l)),
            };

            let l = Self::ask(left, &left_obs, config)?;
            let r = Self::ask(right, &right_obs, config)?;

            result.record(outcome(l, r, config.signs));
            previous = Some((l, r));
        }

        log::trace!(
            "episode {} vs {}: {}-{} ({} draws)",
            left.name(),
            right.name(),
            result.left_wins,
            result.right_wins,
            result.draws
        );

        Ok(result)
    }
}
