//! Agent wrapping a trained recurrent policy.
use crate::RecurrentMlp;
use anyhow::Result;
use rand::{rngs::StdRng, Rng};
use rand_distr::StandardNormal;
use sar_core::{Action, AgentConfig, Observation, SarError, SearchAgent};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A policy network carrying a recurrent state between steps.
pub trait RecurrentPolicy {
    /// The state at the start of an episode.
    fn initial_state(&self) -> Vec<f32>;

    /// Returns the mean action and the next state.
    fn forward(&self, input: &[f32], state: &[f32]) -> Result<(Vec<f32>, Vec<f32>)>;

    /// Log standard deviations of the Gaussian action distribution.
    fn log_std(&self) -> &[f32];
}

/// Configuration of [`RecurrentAgent`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RecurrentAgentConfig {
    /// File of the trained parameters.
    pub weights: PathBuf,

    /// Sample actions from the policy distribution. If `false`, the mean action is used.
    #[serde(default = "default_explore")]
    pub explore: bool,

    /// Observation fields fed to the policy. All fields are used if not given.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

fn default_explore() -> bool {
    true
}

/// Agent running a recurrent policy trained outside of this crate.
///
/// Observation fields are flattened in key order and fed to the policy. The recurrent
/// state is carried between calls of [`SearchAgent::act`] and restored to the initial
/// state by [`SearchAgent::reset`].
pub struct RecurrentAgent<P: RecurrentPolicy> {
    policy: P,
    state: Vec<f32>,
    explore: bool,
    fields: Option<Vec<String>>,
}

impl<P: RecurrentPolicy> RecurrentAgent<P> {
    pub fn new(policy: P, explore: bool, fields: Option<Vec<String>>) -> Self {
        let state = policy.initial_state();
        Self {
            policy,
            state,
            explore,
            fields,
        }
    }

    /// The current recurrent state.
    pub fn state(&self) -> &[f32] {
        &self.state
    }
}

impl RecurrentAgent<RecurrentMlp> {
    pub fn build(config: RecurrentAgentConfig) -> Result<Self> {
        let policy = RecurrentMlp::load(&config.weights)?;
        Ok(Self::new(policy, config.explore, config.fields))
    }

    /// Constructor registered in [`AgentRegistry`](sar_core::AgentRegistry).
    pub fn from_agent_config(config: &AgentConfig) -> Result<Box<dyn SearchAgent>> {
        let config = config.params_as::<RecurrentAgentConfig>()?;
        Ok(Box::new(Self::build(config)?))
    }
}

impl<P: RecurrentPolicy> SearchAgent for RecurrentAgent<P> {
    fn reset(&mut self) {
        self.state = self.policy.initial_state();
    }

    fn act(&mut self, obs: &Observation, rng: &mut StdRng) -> Result<Action> {
        let input = obs.flatten(self.fields.as_deref())?;
        let (mean, state) = self.policy.forward(&input, &self.state).map_err(|e| {
            SarError::Observation(format!("{} (input size = {})", e, input.len()))
        })?;
        self.state = state;

        let act: Vec<f32> = match self.explore {
            true => mean
                .iter()
                .zip(self.policy.log_std().iter())
                .map(|(m, log_std)| {
                    let z: f32 = rng.sample(StandardNormal);
                    m + log_std.exp() * z
                })
                .collect(),
            false => mean,
        };
        Action::from_slice(&act).ok_or_else(|| {
            SarError::Observation("policy returned fewer than 2 values".into()).into()
        })
    }
}
