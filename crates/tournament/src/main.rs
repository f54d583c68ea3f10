//! Tournament CLI
//!
//! Run a round robin between rock-paper-scissors agents and rank them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tournament::{run_configured, TournamentConfig, TournamentResults};

#[derive(Debug, Parser)]
#[command(name = "arena", version)]
#[command(about = "Round-robin tournament runner for rock-paper-scissors agents")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play every pairing of the roster once and print both rankings
    Run {
        /// TOML configuration file; flags below override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Steps per episode
        #[arg(long)]
        steps: Option<u32>,

        /// Number of signs in the game
        #[arg(long)]
        signs: Option<u32>,

        /// Roster seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Play agent-disjoint matches concurrently
        #[arg(long)]
        parallel: bool,

        /// Agents to enter (comma-separated catalog names)
        #[arg(long, value_delimiter = ',')]
        agents: Option<Vec<String>>,

        /// Write the full results as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List every agent in the catalog
    List,
    /// Print the report of a saved results file
    Report {
        /// JSON file written by `run --output`
        path: PathBuf,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<TournamentConfig> {
    match path {
        Some(path) => TournamentConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(TournamentConfig::default()),
    }
}

fn list_agents() {
    println!("{:<20} {}", "Agent", "Family");
    println!("{}", "-".repeat(40));
    for (name, family) in agents::catalog() {
        println!("{:<20} {}", name, family);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Run {
            config,
            steps,
            signs,
            seed,
            parallel,
            agents,
            output,
        } => {
            let mut config = load_config(config.as_ref())?;
            if let Some(steps) = steps {
                config.episode_steps = steps;
            }
            if let Some(signs) = signs {
                config.signs = signs;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if agents.is_some() {
                config.roster = agents;
            }
            config.parallel |= parallel;

            let results = run_configured(&config).context("tournament aborted")?;
            results.print_report();

            if let Some(path) = output {
                results
                    .save(&path)
                    .with_context(|| format!("saving results to {}", path.display()))?;
                log::info!("results written to {}", path.display());
            }
        }
        Command::List => list_agents(),
        Command::Report { path } => {
            let results = TournamentResults::load(&path)
                .with_context(|| format!("loading results from {}", path.display()))?;
            results.print_report();
        }
    }

    Ok(())
}
