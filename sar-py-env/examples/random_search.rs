use anyhow::Result;
use pyo3::{types::PyModule, Python};
use sar_core::{
    Env as _, EvaluationReport, Evaluator as _, EvaluatorConfig, SearchEvaluator, TaskConfig,
};
use sar_policy_no_backend::{RandomAgent, RandomAgentConfig};
use sar_py_env::{SearchEnv, SearchEnvConfig};

/// A point robot on a plane looking for a target, without the simulator.
const TOY_SEARCH: &str = r#"
import numpy as np

class ToySearchEnv:
    def __init__(self, config):
        self.max_steps = config["max_steps"]
        self.success_dist = config["success_dist"]
        self.rng = np.random.default_rng()

    def seed(self, seed):
        self.rng = np.random.default_rng(seed)

    def reset(self):
        self.pos = np.zeros(2)
        self.target = self.rng.uniform(-5.0, 5.0, size=2)
        return self._obs()

    def step(self, action):
        self.pos = self.pos + action
        dist = float(np.linalg.norm(self.target - self.pos))
        reached_goal = dist < self.success_dist
        collided = bool(np.abs(self.pos).max() > 6.0)
        info = {"reached_goal": reached_goal, "collided": collided}
        return self._obs(), -dist, reached_goal or collided, info

    def close(self):
        pass

    def _obs(self):
        dist = np.linalg.norm(self.target - self.pos)
        return {
            "depth": np.full((4, 4, 1), dist),
            "grayscale": np.zeros((4, 4, 1), dtype=np.uint8),
        }
"#;

fn load_toy_search() -> Result<()> {
    Python::with_gil(|py| -> Result<()> {
        PyModule::from_code(py, TOY_SEARCH, "toy_search.py", "toy_search")?;
        Ok(())
    })
}

fn env_config(task: &TaskConfig) -> SearchEnvConfig {
    SearchEnvConfig::default()
        .task(task.clone())
        .env_class("toy_search", "ToySearchEnv")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    load_toy_search()?;

    let task = TaskConfig::new("", 0).set("max_steps", 50u64);
    let mut agent = RandomAgent::build(RandomAgentConfig::default())?;
    let config = EvaluatorConfig::default().n_episodes(5).seed(Some(42));

    let mut evaluator = SearchEvaluator::<SearchEnv>::new(&env_config(&task), config)?;
    let evaluation = evaluator.evaluate(&mut agent)?;
    evaluator.close()?;

    println!("{}", EvaluationReport::new(evaluation, task).to_yaml()?);

    Ok(())
}

#[test]
fn test_random_search() -> Result<()> {
    load_toy_search()?;

    let task = TaskConfig::new("", 0).set("max_steps", 10u64);
    let mut agent = RandomAgent::build(RandomAgentConfig::default())?;
    let config = EvaluatorConfig::default().n_episodes(3).seed(Some(0)).verbose(false);

    let mut evaluator = SearchEvaluator::<SearchEnv>::new(&env_config(&task), config)?;
    let evaluation = evaluator.evaluate(&mut agent)?;
    assert_eq!(evaluator.env().map(|env| env.max_steps()), Some(10));
    evaluator.close()?;

    assert_eq!(evaluation.results.len(), 3);
    assert!(evaluation.results.iter().all(|r| r.steps < 10));
    Ok(())
}
