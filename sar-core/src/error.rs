//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
///
/// Functions in this workspace return [`anyhow::Result`]; values of this type are the roots
/// of those errors and can be recovered with [`anyhow::Error::downcast_ref`].
#[derive(Error, Debug)]
pub enum SarError {
    /// No agent is registered under the given name.
    #[error("{0} is not a registered agent (available: {1:?})")]
    UnknownAgent(String, Vec<String>),

    /// An agent with the given name has already been registered.
    #[error("Multiple definitions of agent {0} found")]
    DuplicateAgent(String),

    /// Agent configuration is malformed.
    #[error("Invalid agent config: {0}")]
    InvalidAgentConfig(String),

    /// Task configuration is malformed.
    #[error("Invalid task config: {0}")]
    InvalidTaskConfig(String),

    /// Observation does not match what a policy expects.
    #[error("Observation error: {0}")]
    Observation(String),

    /// The environment was used after being closed.
    #[error("Environment is closed")]
    EnvClosed,
}
