//! Tournament configuration, loadable from TOML.
//!
//! ```toml
//! name = "Nightly"
//! episode_steps = 1000
//! signs = 3
//! seed = 42
//! parallel = false
//! roster = ["rock", "paper", "statistical"]
//! ```
//!
//! Every key is optional; missing keys fall back to [`TournamentConfig::default`].

use agents::{build_roster, StrategyAgent, CATALOG};
use rps_core::{Configuration, ConfigError, DEFAULT_EPISODE_STEPS, DEFAULT_SIGNS};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TournamentError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub name: String,
    /// Steps per episode
    pub episode_steps: u32,
    /// Size of the action space
    pub signs: u32,
    /// Roster seed; drawn at random when absent
    pub seed: Option<u64>,
    /// Play agent-disjoint matches concurrently
    pub parallel: bool,
    /// Agent names in play order; the whole catalog when absent
    pub roster: Option<Vec<String>>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "Round robin".to_string(),
            episode_steps: DEFAULT_EPISODE_STEPS,
            signs: DEFAULT_SIGNS,
            seed: None,
            parallel: false,
            roster: None,
        }
    }
}

impl TournamentConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validated game parameters
    pub fn configuration(&self) -> Result<Configuration, ConfigError> {
        Configuration::new(self.signs, self.episode_steps)
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Names of the agents that will play, in order
    pub fn roster_names(&self) -> Vec<String> {
        match &self.roster {
            Some(names) => names.clone(),
            None => CATALOG.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Build the configured roster from `seed`
    pub fn build_roster(&self, seed: u64) -> Result<Vec<StrategyAgent>, TournamentError> {
        let names = self.roster_names();
        if names.len() < 2 {
            return Err(ConfigError::RosterTooSmall(names.len()).into());
        }
        Ok(build_roster(&names, seed)?)
    }
}
