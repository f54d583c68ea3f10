pub mod error;
pub mod evaluator;
pub mod types;

pub use error::*;
pub use evaluator::*;
pub use types::*;


// =============================================================================
// Agent trait: implemented by every strategy that can enter the arena
// =============================================================================

/// Trait that all agents must implement.
///
/// An agent is created once per roster entry and keeps its private memory
/// across every match it plays; nothing outside the agent resets it.
pub trait Agent: Send {
    /// Choose a sign for the current step.
    ///
    /// # Arguments
    /// * `obs` - Step number and the opponent's previous move (absent on step 0)
    /// * `config` - Game parameters for the running match
    ///
    /// # Returns
    /// A sign in `[0, config.signs)`. Anything else is reported by the
    /// evaluator as a contract violation.
    fn decide(&mut self, obs: &Observation, config: &Configuration) -> Result<Sign, AgentError>;

    /// Roster name of this agent
    fn name(&self) -> &str;
}
