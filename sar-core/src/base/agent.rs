//! Agent.
use super::{Action, Observation};
use anyhow::Result;
use rand::rngs::StdRng;

/// A policy submitted to the search task.
///
/// Agents are constructed by name through [`AgentRegistry`](crate::AgentRegistry).
pub trait SearchAgent {
    /// Called at the start of every episode.
    ///
    /// Implementations clear any episode specific state here, e.g., recurrent states.
    fn reset(&mut self) {}

    /// Takes an observation and returns forward velocity and yaw rate commands.
    ///
    /// `rng` is the random number generator of the current episode. Stochastic agents
    /// must draw from it, not from a global source, so that seeded evaluations are
    /// reproducible.
    fn act(&mut self, obs: &Observation, rng: &mut StdRng) -> Result<Action>;
}
