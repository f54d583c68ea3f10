//! Tournament results storage and reporting

use rps_core::Configuration;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TournamentError;
use crate::match_runner::MatchResult;
use crate::ranking;

/// Running totals for one agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    /// Step wins accumulated over every match the agent played
    pub episodes_sum: u64,
    /// Tournament score: 2 per match won, 1 per match drawn
    pub points: u32,
}

impl Standing {
    fn new(name: String) -> Self {
        Self {
            name,
            episodes_sum: 0,
            points: 0,
        }
    }
}

/// Per-agent totals, in roster order.
///
/// Rosters are small, so lookups by name are linear scans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsTable {
    standings: Vec<Standing>,
}

impl ResultsTable {
    /// Empty table with one zeroed entry per name
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            standings: names.into_iter().map(|n| Standing::new(n.into())).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Standing> {
        self.standings.iter().find(|s| s.name == name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Result<&mut Standing, TournamentError> {
        self.standings
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| TournamentError::UnknownAgent(name.to_string()))
    }

    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    pub fn len(&self) -> usize {
        self.standings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}

/// A single match entry in the tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub left: String,
    pub right: String,
    pub result: MatchResult,
}

/// Complete tournament results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Game parameters every match was played with
    pub configuration: Configuration,
    /// Seed the roster was built from, when known
    #[serde(default)]
    pub seed: Option<u64>,
    /// Accumulated points and win totals
    pub table: ResultsTable,
    /// All match results, in the order they were played
    pub matches: Vec<MatchEntry>,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, configuration: Configuration) -> Self {
        Self {
            name: name.to_string(),
            configuration,
            seed: None,
            table: ResultsTable::new(participants),
            matches: Vec::new(),
        }
    }

    /// Add a match result to the log
    pub fn add_match(&mut self, left: &str, right: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            left: left.to_string(),
            right: right.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Config: {} signs, {} steps/episode, {} agents, {} matches",
            self.configuration.signs,
            self.configuration.episode_steps,
            self.table.len(),
            self.matches.len()
        ));
        if let Some(seed) = self.seed {
            report.push_str(&format!(", seed {}", seed));
        }
        report.push_str("\n\n");

        for (title, order) in [
            ("By points", ranking::by_points(&self.table)),
            ("By episodes", ranking::by_episodes(&self.table)),
        ] {
            report.push_str(&format!("{}:\n", title));
            report.push_str(&format!(
                "{:>4}  {:<20} {:>8} {:>12}\n",
                "#", "Agent", "Points", "Episodes"
            ));
            report.push_str(&"-".repeat(48));
            report.push('\n');
            for (rank, standing) in order.iter().enumerate() {
                report.push_str(&format!(
                    "{:>4}  {:<20} {:>8} {:>12}\n",
                    rank + 1,
                    standing.name,
                    standing.points,
                    standing.episodes_sum
                ));
            }
            report.push('\n');
        }

        report.push_str("Matches:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>6}-{:<6} {:>6}\n",
            "Left", "Right", "L", "R", "Draws"
        ));
        report.push_str(&"-".repeat(64));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>6}-{:<6} {:>6}\n",
                entry.left,
                entry.right,
                entry.result.left_wins,
                entry.result.right_wins,
                entry.result.draws
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
