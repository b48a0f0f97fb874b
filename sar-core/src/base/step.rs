//! Environment step.
use super::Observation;

/// Flags reported by the simulator at every step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchInfo {
    /// The agent is within the success distance of the target.
    pub reached_goal: bool,

    /// The agent collided with the scene.
    pub collided: bool,
}

/// The result of applying an action to an environment.
#[derive(Clone, Debug)]
pub struct Step {
    /// Observation after the action.
    pub obs: Observation,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if the episode has ended.
    pub is_done: bool,

    /// Information from the simulator.
    pub info: SearchInfo,
}

impl Step {
    /// Constructs a [`Step`] object.
    pub fn new(obs: Observation, reward: f32, is_done: bool, info: SearchInfo) -> Self {
        Step {
            obs,
            reward,
            is_done,
            info,
        }
    }

    #[inline]
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_done
    }
}
