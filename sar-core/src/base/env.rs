//! Environment.
use super::{Action, Observation, Step};
use anyhow::Result;

/// Represents the target search task.
///
/// The environment is a scoped resource: it is built once per evaluation run and
/// [`Env::close`] is called when the run ends.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Builds an environment.
    fn build(config: &Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// The maximum number of steps in an episode.
    fn max_steps(&self) -> usize;

    /// Resets the environment and returns the initial observation.
    ///
    /// If `seed` is given, the environment is reseeded before reset.
    fn reset(&mut self, seed: Option<u64>) -> Result<Observation>;

    /// Performes an environment step.
    fn step(&mut self, act: &Action) -> Result<Step>;

    /// Releases the resources of the environment, e.g., the simulator process.
    fn close(&mut self) -> Result<()>;
}
