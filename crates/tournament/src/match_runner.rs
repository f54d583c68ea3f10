//! Match runner for playing one episode between two agents

use rps_core::{Agent, Configuration, EpisodeResult, EvaluatorError, GameEvaluator, RpsEvaluator};
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;

/// Result of one match, from the left agent's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub left_wins: u32,
    pub right_wins: u32,
    /// Steps won by neither side
    #[serde(default)]
    pub draws: u32,
}

/// Who took the match, decided by comparing win counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Left,
    Right,
    Draw,
}

impl MatchResult {
    pub fn new(left_wins: u32, right_wins: u32) -> Self {
        Self {
            left_wins,
            right_wins,
            draws: 0,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        use std::cmp::Ordering;
        match self.left_wins.cmp(&self.right_wins) {
            Ordering::Greater => MatchOutcome::Left,
            Ordering::Less => MatchOutcome::Right,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }

    pub fn decisive_steps(&self) -> u64 {
        u64::from(self.left_wins) + u64::from(self.right_wins)
    }
}

impl From<EpisodeResult> for MatchResult {
    fn from(episode: EpisodeResult) -> Self {
        Self {
            left_wins: episode.left_wins,
            right_wins: episode.right_wins,
            draws: episode.draws,
        }
    }
}

/// Runs matches between two agents through a game evaluator
pub struct MatchRunner<'e> {
    evaluator: &'e dyn GameEvaluator,
    config: Configuration,
}

impl<'e> MatchRunner<'e> {
    pub fn new(evaluator: &'e dyn GameEvaluator, config: Configuration) -> Self {
        Self { evaluator, config }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Play one episode between `left` and `right`.
    ///
    /// Both agents keep whatever memory the episode leaves behind. Evaluator
    /// failures are returned as-is, never retried.
    pub fn run_match(
        &self,
        left: &mut dyn Agent,
        right: &mut dyn Agent,
    ) -> Result<MatchResult, TournamentError> {
        let left_name = left.name().to_string();
        let right_name = right.name().to_string();
        let fail = |source| TournamentError::Match {
            left: left_name.clone(),
            right: right_name.clone(),
            source,
        };

        let episode = self
            .evaluator
            .run_episode(left, right, &self.config)
            .map_err(fail)?;

        let result = MatchResult::from(episode);
        if result.decisive_steps() > u64::from(self.config.episode_steps) {
            return Err(fail(EvaluatorError::InconsistentResult {
                left_wins: episode.left_wins,
                right_wins: episode.right_wins,
                episode_steps: self.config.episode_steps,
            }));
        }

        log::debug!(
            "{} vs {}: {}-{} ({} draws)",
            left_name,
            right_name,
            result.left_wins,
            result.right_wins,
            result.draws
        );
        Ok(result)
    }
}

/// Quick utility to play a single classic match with the built-in evaluator
pub fn quick_match(
    left: &mut dyn Agent,
    right: &mut dyn Agent,
    episode_steps: u32,
) -> Result<MatchResult, TournamentError> {
    let config = Configuration::classic(episode_steps)?;
    let evaluator = RpsEvaluator::new();
    MatchRunner::new(&evaluator, config).run_match(left, right)
}
