//! Action.
use serde::{Deserialize, Serialize};

/// Forward velocity and yaw rate commands.
///
/// Both components are kept within `[-1, 1]`; constructors clip their inputs and map
/// `NaN` to zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action([f32; 2]);

fn clip(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-1.0, 1.0)
    }
}

impl Action {
    /// Constructs an action, clipping both commands to `[-1, 1]`.
    pub fn new(forward_velocity: f32, yaw_rate: f32) -> Self {
        Self([clip(forward_velocity), clip(yaw_rate)])
    }

    /// Constructs an action from the first two values of a slice.
    ///
    /// Returns `None` if the slice has fewer than two values.
    pub fn from_slice(v: &[f32]) -> Option<Self> {
        match v {
            [f, y, ..] => Some(Self::new(*f, *y)),
            _ => None,
        }
    }

    /// Forward velocity command.
    pub fn forward_velocity(&self) -> f32 {
        self.0[0]
    }

    /// Yaw rate command.
    pub fn yaw_rate(&self) -> f32 {
        self.0[1]
    }

    /// Both commands as an array.
    pub fn to_array(&self) -> [f32; 2] {
        self.0
    }
}

impl From<[f32; 2]> for Action {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl Default for Action {
    fn default() -> Self {
        Self([0.0, 0.0])
    }
}
