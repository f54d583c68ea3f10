//! Rock-paper-scissors agents
//!
//! A fixed catalog of strategies, from constant players to hybrids that
//! switch between counter and frequency responses. Each roster entry is a
//! [`StrategyAgent`]: a [`Strategy`] with its memory plus a private,
//! explicitly seeded random source.
//!
//! Agents are meant to be built once and reused for every match they play.
//! Memory is never reset from outside; see [`Strategy::resets_on_first_step`]
//! for which strategies clear themselves when an episode starts.

mod histogram;
pub mod roster;
mod strategy;

pub use histogram::Histogram;
pub use roster::{build_roster, catalog, default_roster, strategy_for, RosterError, CATALOG};
pub use strategy::{beats, block_len, Strategy, PERIODIC_RANDOM_INTERVAL};

use rand::rngs::StdRng;
use rand::SeedableRng;
use rps_core::{Agent, AgentError, Configuration, Observation, Sign};

#[cfg(test)]
mod histogram_tests;

/// A named strategy with its own random source.
#[derive(Debug, Clone)]
pub struct StrategyAgent {
    name: String,
    strategy: Strategy,
    rng: StdRng,
}

impl StrategyAgent {
    /// Agent whose random draws are reproducible from `seed`.
    pub fn seeded(name: impl Into<String>, strategy: Strategy, seed: u64) -> Self {
        Self::with_rng(name, strategy, StdRng::seed_from_u64(seed))
    }

    /// Agent seeded from operating system entropy.
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self::with_rng(name, strategy, StdRng::from_entropy())
    }

    pub fn with_rng(name: impl Into<String>, strategy: Strategy, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            strategy,
            rng,
        }
    }

    /// Current strategy, including its memory.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut Strategy {
        &mut self.strategy
    }
}

impl Agent for StrategyAgent {
    fn decide(&mut self, obs: &Observation, config: &Configuration) -> Result<Sign, AgentError> {
        self.strategy.decide(obs, config, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
