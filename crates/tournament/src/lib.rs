//! Tournament Runner for the RPS agent arena
//!
//! This crate provides infrastructure for:
//! - Running matches between agents through a game evaluator
//! - Playing a full round robin over a roster, sequentially or in parallel
//! - Scoring matches into points and ranking the results
//! - Saving results and generating reports
//!
//! # Usage
//!
//! ```bash
//! # Full catalog, 1000 steps per episode
//! cargo run -p tournament -- run --steps 1000
//!
//! # A handful of agents, reproducible, results saved to disk
//! cargo run -p tournament -- run --agents rock,paper,statistical --seed 7 --output results.json
//! ```

mod config;
mod engine;
mod error;
mod match_runner;
pub mod ranking;
mod results;
pub mod schedule;
mod scoring;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
pub use scoring::*;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod match_runner_tests;
#[cfg(test)]
mod schedule_tests;
#[cfg(test)]
mod scoring_tests;
