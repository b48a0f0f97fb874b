//! Configuration of agents.
use crate::error::SarError;
use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of an agent, loaded from a YAML file provided by the user.
///
/// `name` selects the agent implementation in an [`AgentRegistry`](crate::AgentRegistry).
/// All other keys are passed to the implementation.
///
/// ```yaml
/// name: RandomAgent
/// action_mean: [0.5, 0.0]
/// action_var: 0.1
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AgentConfig {
    /// Name of the agent implementation.
    pub name: String,

    /// Implementation specific parameters.
    #[serde(flatten)]
    pub params: Mapping,
}

impl AgentConfig {
    /// Creates a configuration without parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Mapping::new(),
        }
    }

    /// Sets a parameter.
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(Value::from(key), value.into());
        self
    }

    /// Returns a parameter.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(&Value::from(key))
    }

    /// Deserializes the parameters into the configuration type of an implementation.
    pub fn params_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_yaml::from_value(Value::Mapping(self.params.clone())).map_err(|e| {
            SarError::InvalidAgentConfig(format!("{}: {}", self.name, e)).into()
        })
    }

    /// Constructs [`AgentConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`AgentConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[derive(Deserialize, Debug)]
    struct RandomParams {
        action_mean: [f32; 2],
        action_var: f32,
    }

    #[test]
    fn test_parse() -> Result<()> {
        let config: AgentConfig = serde_yaml::from_str(
            "name: RandomAgent\naction_mean: [0.5, 0]\naction_var: 0.1\n",
        )?;
        assert_eq!(config.name, "RandomAgent");
        assert_eq!(config.params.len(), 2);

        let params: RandomParams = config.params_as()?;
        assert_eq!(params.action_mean, [0.5, 0.0]);
        assert_eq!(params.action_var, 0.1);
        Ok(())
    }

    #[test]
    fn test_params_as_error() {
        let config = AgentConfig::new("RandomAgent").param("action_mean", "zero");
        let err = config.params_as::<RandomParams>().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SarError>(),
            Some(SarError::InvalidAgentConfig(_))
        ));
    }

    #[test]
    fn test_missing_name() {
        assert!(serde_yaml::from_str::<AgentConfig>("weights: model.yaml\n").is_err());
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let dir = TempDir::new("agent_config")?;
        let path = dir.path().join("agent.yaml");
        let config = AgentConfig::new("RecurrentAgent")
            .param("weights", "model.yaml")
            .param("explore", false);
        config.save(&path)?;
        let config_ = AgentConfig::load(&path)?;
        assert_eq!(config, config_);
        assert_eq!(config_.get("explore"), Some(&Value::from(false)));
        Ok(())
    }
}
