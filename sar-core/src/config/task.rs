//! Configuration of the search task.
use crate::error::SarError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// The maximum number of steps of an episode, if not overridden.
pub const DEFAULT_MAX_STEPS: usize = 400;

/// Settings of the simulator and the scenario of an evaluation run.
///
/// The configuration is passed verbatim to the simulator, so it is kept as an untyped
/// mapping. [`TaskConfig::default`] gives the challenge defaults:
///
/// ```yaml
/// renderer: flight_goggles
/// fields: [image, depth]
/// max_steps: 400
/// action_mapper: dubins-car
/// simulator: dubins-car
/// flight_goggles_scene: ground_floor_car
/// max_range_from_ownship: 20
/// success_dist: 3
/// enforce_target_in_fov: true
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct TaskConfig(Mapping);

impl Default for TaskConfig {
    fn default() -> Self {
        let fields = vec![Value::from("image"), Value::from("depth")];
        Self(Mapping::new())
            .set("renderer", "flight_goggles")
            .set("fields", fields)
            .set("max_steps", DEFAULT_MAX_STEPS as u64)
            .set("action_mapper", "dubins-car")
            .set("simulator", "dubins-car")
            .set("flight_goggles_scene", "ground_floor_car")
            .set("max_range_from_ownship", 20u64)
            .set("success_dist", 3u64)
            .set("enforce_target_in_fov", true)
    }
}

impl TaskConfig {
    /// Default configuration with the simulator executable and its base port.
    pub fn new(flight_goggles_path: impl AsRef<Path>, base_port: u16) -> Self {
        let path = flight_goggles_path.as_ref().to_string_lossy().into_owned();
        Self::default()
            .set("flight_goggles_path", path)
            .set("base_port", base_port as u64)
    }

    /// Builds the configuration of an evaluation run.
    ///
    /// Defaults are updated with the simulator path and port, then with the mapping in
    /// `custom_config` if given. Keys of `custom_config` take precedence.
    pub fn build(
        flight_goggles_path: impl AsRef<Path>,
        base_port: u16,
        custom_config: Option<&Path>,
    ) -> Result<Self> {
        let config = Self::new(flight_goggles_path, base_port);
        let config = match custom_config {
            Some(path) => config.merge_file(path)?,
            None => config,
        };
        config.max_steps()?;
        Ok(config)
    }

    /// Sets a top-level key.
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(Value::from(key), value.into());
        self
    }

    /// Returns the value of a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(&Value::from(key))
    }

    /// Overwrites top-level keys with those of `overrides`.
    pub fn merge(mut self, overrides: Mapping) -> Self {
        for (k, v) in overrides.into_iter() {
            self.0.insert(k, v);
        }
        self
    }

    /// Overwrites top-level keys with those of the mapping in a YAML file.
    ///
    /// An empty file leaves the configuration unchanged.
    pub fn merge_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)?;
        if s.trim().is_empty() {
            return Ok(self);
        }
        match serde_yaml::from_str(&s)? {
            Value::Null => Ok(self),
            Value::Mapping(overrides) => Ok(self.merge(overrides)),
            _ => Err(SarError::InvalidTaskConfig(format!(
                "{} does not contain a mapping",
                path.display()
            ))
            .into()),
        }
    }

    /// The maximum number of steps of an episode.
    ///
    /// [`DEFAULT_MAX_STEPS`] if the key is absent. Any value other than a non-negative
    /// integer is an error.
    pub fn max_steps(&self) -> Result<usize> {
        match self.get("max_steps") {
            None => Ok(DEFAULT_MAX_STEPS),
            Some(v) => match v.as_u64() {
                Some(n) => Ok(n as usize),
                None => Err(SarError::InvalidTaskConfig(format!(
                    "max_steps must be a non-negative integer, got {:?}",
                    v
                ))
                .into()),
            },
        }
    }

    /// The configuration as a mapping.
    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    /// Constructs [`TaskConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TaskConfig`].
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

    #[test]
    fn test_defaults() -> Result<()> {
        let config = TaskConfig::new("/opt/flightgoggles/fg.x86_64", 10253);
        assert_eq!(config.max_steps()?, 400);
        assert_eq!(
            config.get("flight_goggles_path"),
            Some(&Value::from("/opt/flightgoggles/fg.x86_64"))
        );
        assert_eq!(config.get("base_port").and_then(|v| v.as_u64()), Some(10253));
        assert_eq!(
            config.get("enforce_target_in_fov"),
            Some(&Value::from(true))
        );
        assert_eq!(config.as_mapping().len(), 11);
        Ok(())
    }

    #[test]
    fn test_overrides_win() -> Result<()> {
        let dir = TempDir::new("task_config")?;
        let path = dir.path().join("env.yaml");
        std::fs::write(&path, "max_steps: 50\nbase_port: 9000\nscene_seed: 3\n")?;

        let config = TaskConfig::build("fg", 10253, Some(&path))?;
        assert_eq!(config.max_steps()?, 50);
        assert_eq!(config.get("base_port").and_then(|v| v.as_u64()), Some(9000));
        assert_eq!(config.get("scene_seed").and_then(|v| v.as_u64()), Some(3));
        assert_eq!(config.get("renderer"), Some(&Value::from("flight_goggles")));
        Ok(())
    }

    #[test]
    fn test_empty_override_file() -> Result<()> {
        let dir = TempDir::new("task_config")?;
        let path = dir.path().join("env.yaml");
        std::fs::write(&path, "")?;
        let config = TaskConfig::build("fg", 10253, Some(&path))?;
        assert_eq!(config, TaskConfig::new("fg", 10253));
        Ok(())
    }

    #[test]
    fn test_invalid_override_file() -> Result<()> {
        let dir = TempDir::new("task_config")?;
        let path = dir.path().join("env.yaml");
        std::fs::write(&path, "- max_steps\n- 50\n")?;
        let err = TaskConfig::build("fg", 10253, Some(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SarError>(),
            Some(SarError::InvalidTaskConfig(_))
        ));
        Ok(())
    }

    #[test]
    fn test_max_steps_not_an_integer() -> Result<()> {
        let dir = TempDir::new("task_config")?;
        let path = dir.path().join("env.yaml");
        for value in &["50.0", "-5", "many"] {
            std::fs::write(&path, format!("max_steps: {}\n", value))?;
            let err = TaskConfig::build("fg", 10253, Some(&path)).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<SarError>(),
                Some(SarError::InvalidTaskConfig(_))
            ));
        }

        let config = TaskConfig::new("fg", 10253).set("max_steps", 50.0);
        assert!(config.max_steps().is_err());

        let mut mapping = TaskConfig::default().as_mapping().clone();
        mapping.remove(&Value::from("max_steps"));
        let config: TaskConfig = serde_yaml::from_value(Value::Mapping(mapping))?;
        assert_eq!(config.max_steps()?, DEFAULT_MAX_STEPS);
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let dir = TempDir::new("task_config")?;
        let path = dir.path().join("task.yaml");
        let config = TaskConfig::new("fg", 10253).set("max_steps", 10u64);
        config.save(&path)?;
        assert_eq!(TaskConfig::load(&path)?, config);
        Ok(())
    }
}
