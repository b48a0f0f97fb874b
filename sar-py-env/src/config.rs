//! Configuration of [`SearchEnv`](crate::SearchEnv).
use sar_core::TaskConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
/// Configuration of [`SearchEnv`](crate::SearchEnv).
pub struct SearchEnvConfig {
    /// Task configuration passed to the Python environment.
    pub task: TaskConfig,

    /// If given, episodes are recorded as videos in this directory.
    pub video_dir: Option<PathBuf>,

    /// Python module defining the environment.
    pub module: String,

    /// Name of the environment class in `module`.
    pub class: String,
}

impl Default for SearchEnvConfig {
    fn default() -> Self {
        Self {
            task: TaskConfig::default(),
            video_dir: None,
            module: "rl_navigation.rllib.search".to_string(),
            class: "SearchWrapperEnv".to_string(),
        }
    }
}

impl SearchEnvConfig {
    /// Set the task configuration.
    pub fn task(mut self, task: TaskConfig) -> Self {
        self.task = task;
        self
    }

    /// Set the directory of recorded videos.
    pub fn video_dir(mut self, v: Option<PathBuf>) -> Self {
        self.video_dir = v;
        self
    }

    /// Set the module and the class of the environment.
    pub fn env_class(mut self, module: impl Into<String>, class: impl Into<String>) -> Self {
        self.module = module.into();
        self.class = class.into();
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_builder() -> anyhow::Result<()> {
        let config = SearchEnvConfig::default()
            .task(TaskConfig::new("fg", 10253))
            .video_dir(Some(PathBuf::from("videos")));
        assert_eq!(config.module, "rl_navigation.rllib.search");
        assert_eq!(config.class, "SearchWrapperEnv");
        assert_eq!(config.task.max_steps()?, 400);
        assert_eq!(config.video_dir, Some(PathBuf::from("videos")));

        let config = config.env_class("my_envs", "SearchEnv");
        assert_eq!((config.module.as_str(), config.class.as_str()), ("my_envs", "SearchEnv"));
        Ok(())
    }
}
