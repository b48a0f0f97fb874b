//! Configurations of agents and of the search task.
mod agent;
mod task;
pub use agent::AgentConfig;
pub use task::{TaskConfig, DEFAULT_MAX_STEPS};
