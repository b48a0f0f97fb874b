//! Random baseline.
use anyhow::Result;
use rand::{rngs::StdRng, Rng};
use rand_distr::Normal;
use sar_core::{Action, AgentConfig, Observation, SarError, SearchAgent};
use serde::{Deserialize, Serialize};

/// Variance of the action distribution, shared by both commands or given per command.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ActionVar {
    /// The same variance for both commands.
    Scalar(f32),

    /// Variances of forward velocity and yaw rate.
    Diag([f32; 2]),
}

impl ActionVar {
    fn diag(&self) -> [f32; 2] {
        match self {
            Self::Scalar(v) => [*v, *v],
            Self::Diag(v) => *v,
        }
    }
}

/// Configuration of [`RandomAgent`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RandomAgentConfig {
    pub action_mean: [f32; 2],
    pub action_var: ActionVar,
}

impl Default for RandomAgentConfig {
    fn default() -> Self {
        Self {
            action_mean: [0.0, 0.0],
            action_var: ActionVar::Scalar(1.0),
        }
    }
}

/// Agent that samples forward velocity and yaw rate from a 2D Gaussian with diagonal
/// covariance. Samples are clipped to `[-1, 1]`.
pub struct RandomAgent {
    dists: [Normal<f32>; 2],
}

impl RandomAgent {
    pub fn build(config: RandomAgentConfig) -> Result<Self> {
        let var = config.action_var.diag();
        let normal = |i: usize| {
            if !(var[i] >= 0.0) {
                return Err(SarError::InvalidAgentConfig(format!(
                    "action_var must be non-negative, got {:?}",
                    config.action_var
                )));
            }
            Normal::new(config.action_mean[i], var[i].sqrt())
                .map_err(|e| SarError::InvalidAgentConfig(e.to_string()))
        };
        Ok(Self {
            dists: [normal(0)?, normal(1)?],
        })
    }

    /// Constructor registered in [`AgentRegistry`](sar_core::AgentRegistry).
    pub fn from_agent_config(config: &AgentConfig) -> Result<Box<dyn SearchAgent>> {
        let config = config.params_as::<RandomAgentConfig>()?;
        Ok(Box::new(Self::build(config)?))
    }
}

impl SearchAgent for RandomAgent {
    fn act(&mut self, _obs: &Observation, rng: &mut StdRng) -> Result<Action> {
        let forward_velocity = rng.sample(&self.dists[0]);
        let yaw_rate = rng.sample(&self.dists[1]);
        Ok(Action::new(forward_velocity, yaw_rate))
    }
}
