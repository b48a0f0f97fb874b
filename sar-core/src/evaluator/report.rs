//! Output file of an evaluation run.
use super::{EpisodeResult, Evaluation, Summary};
use crate::TaskConfig;
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Results of an evaluation run with the task configuration they were obtained with.
///
/// Serialized as a YAML document with the keys `summary`, `episodes` and
/// `task configuration`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Aggregate statistics.
    pub summary: Summary,

    /// Per-episode results.
    pub episodes: Vec<EpisodeResult>,

    /// Fully resolved task configuration.
    #[serde(rename = "task configuration")]
    pub task_config: TaskConfig,
}

impl EvaluationReport {
    /// Constructs a report.
    pub fn new(evaluation: Evaluation, task_config: TaskConfig) -> Self {
        Self {
            summary: evaluation.summary,
            episodes: evaluation.results,
            task_config,
        }
    }

    /// The report as a YAML document.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Writes the report as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        file.write_all(self.to_yaml()?.as_bytes())?;
        info!("Saved results to {:?}", path);
        Ok(())
    }

    /// Reads a report written by [`EvaluationReport::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }
}
