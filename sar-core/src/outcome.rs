//! Outcome of an episode.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal classification of an episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeOutcome {
    /// The agent reached the target.
    #[serde(rename = "found target")]
    FoundTarget,

    /// The agent collided with the scene.
    #[serde(rename = "collided")]
    Collided,

    /// The step budget ran out.
    #[serde(rename = "time expired")]
    TimeExpired,
}

impl EpisodeOutcome {
    /// Classifies an episode from the simulator flags of its last step.
    ///
    /// Reaching the goal takes priority over a collision in the same step.
    pub fn from_conditions(reached_goal: bool, collided: bool) -> Self {
        if reached_goal {
            Self::FoundTarget
        } else if collided {
            Self::Collided
        } else {
            Self::TimeExpired
        }
    }
}

impl fmt::Display for EpisodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FoundTarget => "found target",
            Self::Collided => "collided",
            Self::TimeExpired => "time expired",
        };
        write!(f, "{}", s)
    }
}
