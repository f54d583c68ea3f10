//! Round-robin tournament engine

use std::collections::HashSet;
use std::sync::Mutex;

use rayon::prelude::*;
use rps_core::{Agent, ConfigError, Configuration, GameEvaluator, RpsEvaluator};

use crate::config::TournamentConfig;
use crate::error::TournamentError;
use crate::match_runner::{MatchResult, MatchRunner};
use crate::results::TournamentResults;
use crate::schedule;
use crate::scoring::apply_result;

/// A roster of agents and the game they play.
///
/// Agents are owned here for the tournament's whole life and are never
/// reset between matches: whatever memory one match leaves in an agent is
/// what its next match starts from.
pub struct Tournament {
    name: String,
    agents: Vec<Box<dyn Agent>>,
    config: Configuration,
    seed: Option<u64>,
}

impl Tournament {
    /// Validate the roster and configuration before anything is played.
    pub fn new(
        name: &str,
        agents: Vec<Box<dyn Agent>>,
        config: Configuration,
    ) -> Result<Self, TournamentError> {
        config.validate()?;
        if agents.len() < 2 {
            return Err(ConfigError::RosterTooSmall(agents.len()).into());
        }
        {
            let mut seen = HashSet::new();
            for agent in &agents {
                if !seen.insert(agent.name()) {
                    return Err(ConfigError::DuplicateName(agent.name().to_string()).into());
                }
            }
        }

        Ok(Self {
            name: name.to_string(),
            agents,
            config,
            seed: None,
        })
    }

    /// Build the tournament a [`TournamentConfig`] describes.
    pub fn from_config(config: &TournamentConfig) -> Result<Self, TournamentError> {
        let game = config.configuration()?;
        let seed = config.resolve_seed();
        let agents = config
            .build_roster(seed)?
            .into_iter()
            .map(|agent| Box::new(agent) as Box<dyn Agent>)
            .collect();
        let mut tournament = Self::new(&config.name, agents, game)?;
        tournament.seed = Some(seed);
        Ok(tournament)
    }

    pub fn names(&self) -> Vec<String> {
        self.agents.iter().map(|a| a.name().to_string()).collect()
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Hand the agents back, memory and all.
    pub fn into_agents(self) -> Vec<Box<dyn Agent>> {
        self.agents
    }

    fn empty_results(&self) -> TournamentResults {
        let mut results = TournamentResults::new(&self.name, self.names(), self.config);
        results.seed = self.seed;
        results
    }

    /// Play every pairing once, one match at a time, in schedule order.
    pub fn run(
        &mut self,
        evaluator: &dyn GameEvaluator,
    ) -> Result<TournamentResults, TournamentError> {
        let pairs = schedule::round_robin(self.agents.len());
        log::info!(
            "starting {}: {} agents, {} matches, {} steps/episode",
            self.name,
            self.agents.len(),
            pairs.len(),
            self.config.episode_steps
        );

        let mut results = self.empty_results();
        let runner = MatchRunner::new(evaluator, self.config);

        for (i, j) in pairs {
            let (head, tail) = self.agents.split_at_mut(j);
            let left = &mut *head[i];
            let right = &mut *tail[0];

            let result = runner.run_match(left, right).map_err(|e| {
                log::warn!("aborting {}: {}", self.name, e);
                e
            })?;

            let (left_name, right_name) = (left.name().to_string(), right.name().to_string());
            apply_result(&mut results.table, &left_name, &right_name, &result)?;
            results.add_match(&left_name, &right_name, result);
        }

        log::info!("finished {}: {} matches played", self.name, results.matches.len());
        Ok(results)
    }

    /// Play the same pairings, running agent-disjoint matches concurrently.
    ///
    /// Each agent sits behind its own lock, so no two matches ever drive the
    /// same agent at once. Results are folded in the same order as [`run`],
    /// but agents with memory may see their opponents in a different order
    /// and so play differently than in a sequential run.
    ///
    /// [`run`]: Tournament::run
    pub fn run_parallel(
        &mut self,
        evaluator: &dyn GameEvaluator,
    ) -> Result<TournamentResults, TournamentError> {
        let names = self.names();
        let rounds = schedule::rounds(names.len());
        log::info!(
            "starting {} in parallel: {} agents, {} rounds, {} matches",
            self.name,
            names.len(),
            rounds.len(),
            schedule::match_count(names.len())
        );

        let runner = MatchRunner::new(evaluator, self.config);
        let slots: Vec<Mutex<Box<dyn Agent>>> =
            std::mem::take(&mut self.agents).into_iter().map(Mutex::new).collect();

        let played = play_rounds(&runner, &slots, &names, &rounds);

        // the agents come back even when a match failed
        self.agents = slots
            .into_iter()
            .map(|slot| slot.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner()))
            .collect();

        let mut played = played.map_err(|e| {
            log::warn!("aborting {}: {}", self.name, e);
            e
        })?;
        // lexicographic pair order is the sequential schedule order
        played.sort_by_key(|&(pair, _)| pair);

        let mut results = self.empty_results();
        for ((i, j), result) in played {
            apply_result(&mut results.table, &names[i], &names[j], &result)?;
            results.add_match(&names[i], &names[j], result);
        }

        log::info!("finished {}: {} matches played", self.name, results.matches.len());
        Ok(results)
    }
}

fn play_rounds(
    runner: &MatchRunner<'_>,
    slots: &[Mutex<Box<dyn Agent>>],
    names: &[String],
    rounds: &[Vec<(usize, usize)>],
) -> Result<Vec<((usize, usize), MatchResult)>, TournamentError> {
    let mut played = Vec::with_capacity(schedule::match_count(slots.len()));

    for (number, round) in rounds.iter().enumerate() {
        log::trace!("round {}: {} matches", number + 1, round.len());
        let outcomes: Vec<((usize, usize), MatchResult)> = round
            .par_iter()
            .map(|&(i, j)| {
                let mut left = slots[i]
                    .lock()
                    .map_err(|_| TournamentError::Poisoned(names[i].clone()))?;
                let mut right = slots[j]
                    .lock()
                    .map_err(|_| TournamentError::Poisoned(names[j].clone()))?;
                let result = runner.run_match(&mut **left, &mut **right)?;
                Ok(((i, j), result))
            })
            .collect::<Result<_, TournamentError>>()?;
        played.extend(outcomes);
    }

    Ok(played)
}

/// Run the tournament a configuration describes with the built-in evaluator.
pub fn run_configured(config: &TournamentConfig) -> Result<TournamentResults, TournamentError> {
    let mut tournament = Tournament::from_config(config)?;
    let evaluator = RpsEvaluator::new();
    if config.parallel {
        tournament.run_parallel(&evaluator)
    } else {
        tournament.run(&evaluator)
    }
}
