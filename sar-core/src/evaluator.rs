//! Evaluate [`SearchAgent`].
use crate::SearchAgent;
use anyhow::Result;
mod config;
mod episode;
mod report;
mod search_evaluator;
mod summary;
pub use config::EvaluatorConfig;
pub use episode::{run_episode, EpisodeResult};
pub use report::EvaluationReport;
pub use search_evaluator::SearchEvaluator;
pub use summary::Summary;

/// Per-episode results of an evaluation run and their summary.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// Results in the order the episodes were run.
    pub results: Vec<EpisodeResult>,

    /// Aggregate of `results`.
    pub summary: Summary,
}

/// Evaluate [`SearchAgent`].
pub trait Evaluator {
    /// Runs the configured number of episodes with `agent`.
    fn evaluate(&mut self, agent: &mut dyn SearchAgent) -> Result<Evaluation>;
}
