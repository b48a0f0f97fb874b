//! Selection of agent implementations by name.
//!
//! Implementations are registered explicitly with a name and a constructor. The name
//! in an [`AgentConfig`] then selects the implementation at runtime:
//!
//! ```ignore
//! let mut registry = AgentRegistry::default();
//! registry.register("RandomAgent", RandomAgent::from_agent_config)?;
//!
//! let config = AgentConfig::load("agent.yaml")?;
//! let agent = registry.build(&config)?;
//! ```
use crate::{config::AgentConfig, error::SarError, SearchAgent};
use anyhow::Result;
use log::debug;
use std::collections::BTreeMap;

/// Constructs an agent from its configuration.
pub type AgentConstructor = fn(&AgentConfig) -> Result<Box<dyn SearchAgent>>;

/// A map from agent names to constructors.
#[derive(Default)]
pub struct AgentRegistry {
    ctors: BTreeMap<String, AgentConstructor>,
}

impl AgentRegistry {
    /// Registers a constructor under `name`.
    ///
    /// Registering a name twice is an error; the first registration is kept.
    pub fn register(&mut self, name: impl Into<String>, ctor: AgentConstructor) -> Result<()> {
        let name = name.into();
        if self.ctors.contains_key(&name) {
            return Err(SarError::DuplicateAgent(name).into());
        }
        debug!("Register agent {}", name);
        self.ctors.insert(name, ctor);
        Ok(())
    }

    /// Returns the constructor registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<AgentConstructor> {
        match self.ctors.get(name) {
            Some(ctor) => Ok(*ctor),
            None => Err(SarError::UnknownAgent(name.to_string(), self.names()).into()),
        }
    }

    /// Builds the agent selected by `config.name`.
    pub fn build(&self, config: &AgentConfig) -> Result<Box<dyn SearchAgent>> {
        let ctor = self.resolve(&config.name)?;
        ctor(config)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.ctors.keys().cloned().collect()
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.ctors.contains_key(name)
    }
}
