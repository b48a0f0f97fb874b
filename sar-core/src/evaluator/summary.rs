//! Aggregate statistics of an evaluation run.
use super::EpisodeResult;
use crate::EpisodeOutcome;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Aggregate statistics of an evaluation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The number of episodes.
    #[serde(rename = "number of episodes")]
    pub n_episodes: usize,

    /// The number of episodes where the target was found.
    #[serde(rename = "found target")]
    pub found_target: usize,

    /// The number of episodes ending with a collision.
    #[serde(rename = "collided")]
    pub collided: usize,

    /// The number of episodes where the step budget ran out.
    #[serde(rename = "time expired")]
    pub time_expired: usize,

    /// Mean of the steps taken over episodes where the target was found.
    /// `None` if the target was never found.
    #[serde(rename = "mean steps to find")]
    pub mean_steps_to_find: Option<f32>,

    /// Duration of the evaluation run in seconds.
    #[serde(rename = "total time")]
    pub total_time: f32,
}

impl Summary {
    /// Aggregates episode results. `total_time` is the wall-clock time of the whole run.
    pub fn from_results(results: &[EpisodeResult], total_time: Duration) -> Self {
        let count = |outcome: EpisodeOutcome| {
            results.iter().filter(|r| r.outcome == outcome).count()
        };
        let found_steps: Vec<usize> = results
            .iter()
            .filter(|r| r.outcome == EpisodeOutcome::FoundTarget)
            .map(|r| r.steps)
            .collect();
        let mean_steps_to_find = match found_steps.len() {
            0 => None,
            n => Some(found_steps.iter().sum::<usize>() as f32 / n as f32),
        };

        Self {
            n_episodes: results.len(),
            found_target: found_steps.len(),
            collided: count(EpisodeOutcome::Collided),
            time_expired: count(EpisodeOutcome::TimeExpired),
            mean_steps_to_find,
            total_time: total_time.as_secs_f32(),
        }
    }

    /// Fraction of episodes where the target was found.
    pub fn success_rate(&self) -> f32 {
        match self.n_episodes {
            0 => 0.0,
            n => self.found_target as f32 / n as f32,
        }
    }
}
