//! Search agents that run without a deep learning backend.
//!
//! [`RandomAgent`] is the random baseline. [`RecurrentAgent`] runs a recurrent policy
//! whose parameters were trained elsewhere and exported to a file; see [`RecurrentMlp`].
//! [`default_registry`] registers both under their type names.
mod mat;
mod random;
mod recurrent;
mod rnn;
pub use mat::Mat;
pub use random::{ActionVar, RandomAgent, RandomAgentConfig};
pub use recurrent::{RecurrentAgent, RecurrentAgentConfig, RecurrentPolicy};
pub use rnn::RecurrentMlp;

use anyhow::Result;
use sar_core::AgentRegistry;

/// Registry of the agents in this crate.
pub fn default_registry() -> Result<AgentRegistry> {
    let mut registry = AgentRegistry::default();
    registry.register("RandomAgent", RandomAgent::from_agent_config)?;
    registry.register(
        "RecurrentAgent",
        RecurrentAgent::<RecurrentMlp>::from_agent_config,
    )?;
    Ok(registry)
}
