//! Named catalog entries and roster construction.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rps_core::{PAPER, ROCK, SCISSORS};
use thiserror::Error;

use crate::{Strategy, StrategyAgent};

/// Every agent name the catalog knows, in default roster order.
pub const CATALOG: [&str; 21] = [
    "rock",
    "paper",
    "scissors",
    "copy_opponent",
    "reactionary",
    "contr_reactionary",
    "monotonous",
    "statistical",
    "random_choice",
    "always_scissors",
    "always_rock",
    "always_paper",
    "alternating",
    "streak_breaker",
    "random_switch",
    "copy_last_move",
    "random_savvy",
    "majority_vote",
    "slow_learner",
    "batch_part",
    "batch_combo",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("unknown agent `{0}`")]
    UnknownAgent(String),
    #[error("agent `{0}` listed more than once")]
    DuplicateName(String),
}

/// Build the strategy registered under `name`.
///
/// `rng` is only drawn from by strategies that seed themselves at
/// construction.
pub fn strategy_for(name: &str, rng: &mut StdRng) -> Option<Strategy> {
    let strategy = match name {
        "rock" | "always_rock" => Strategy::Constant(ROCK),
        "paper" | "always_paper" => Strategy::Constant(PAPER),
        "scissors" | "always_scissors" => Strategy::Constant(SCISSORS),
        "copy_opponent" | "copy_last_move" => Strategy::Mirror,
        "reactionary" => Strategy::Counter,
        "contr_reactionary" => Strategy::anti_counter(),
        "monotonous" => Strategy::CyclicByStep,
        "statistical" | "majority_vote" => Strategy::frequency_counter(),
        "random_choice" => Strategy::UniformRandom,
        "alternating" => Strategy::alternator(),
        "streak_breaker" => Strategy::streak_breaker(),
        "random_switch" => Strategy::random_switch(rng),
        "random_savvy" => Strategy::RandomizedCounter,
        "slow_learner" => Strategy::PeriodicRandom,
        "batch_part" => Strategy::batch_shift(),
        "batch_combo" => Strategy::batch_combo(),
        _ => return None,
    };
    Some(strategy)
}

/// Catalog names paired with the family each one belongs to.
pub fn catalog() -> Vec<(&'static str, &'static str)> {
    let mut rng = StdRng::seed_from_u64(0);
    CATALOG
        .iter()
        .filter_map(|&name| strategy_for(name, &mut rng).map(|s| (name, s.family())))
        .collect()
}

/// Derive a per-agent seed so that roster slots draw independent streams.
fn agent_seed(roster_seed: u64, index: usize) -> u64 {
    roster_seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Build one agent per name, in the given order.
pub fn build_roster<S: AsRef<str>>(
    names: &[S],
    seed: u64,
) -> Result<Vec<StrategyAgent>, RosterError> {
    let mut seen = HashSet::new();
    let mut roster = Vec::with_capacity(names.len());

    for (index, name) in names.iter().enumerate() {
        let name = name.as_ref();
        if !seen.insert(name) {
            return Err(RosterError::DuplicateName(name.to_string()));
        }
        let mut rng = StdRng::seed_from_u64(agent_seed(seed, index));
        let strategy = strategy_for(name, &mut rng)
            .ok_or_else(|| RosterError::UnknownAgent(name.to_string()))?;
        roster.push(StrategyAgent::with_rng(name, strategy, rng));
    }

    log::debug!("built roster of {} agents (seed {})", roster.len(), seed);
    Ok(roster)
}

/// The full catalog, one agent per entry.
pub fn default_roster(seed: u64) -> Vec<StrategyAgent> {
    CATALOG
        .iter()
        .enumerate()
        .filter_map(|(index, &name)| {
            let mut rng = StdRng::seed_from_u64(agent_seed(seed, index));
            strategy_for(name, &mut rng).map(|s| StrategyAgent::with_rng(name, s, rng))
        })
        .collect()
}
