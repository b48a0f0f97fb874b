use anyhow::Result;
use sar_core::{
    dummy::{StubEnv, StubEnvConfig},
    AgentConfig, EvaluationReport, Evaluator, EvaluatorConfig, SarError, SearchEvaluator,
    TaskConfig,
};
use sar_policy_no_backend::default_registry;
use tempdir::TempDir;

fn random_agent_config() -> Result<AgentConfig> {
    Ok(serde_yaml::from_str(
        "name: RandomAgent\naction_mean: [0.5, 0.0]\naction_var: 0.1\n",
    )?)
}

#[test]
fn test_three_episodes_done_on_first_step() -> Result<()> {
    let registry = default_registry()?;
    let mut agent = registry.build(&random_agent_config()?)?;

    let env_config = StubEnvConfig::default().done_at(Some(1));
    let config = EvaluatorConfig::default().n_episodes(3).seed(Some(0));
    let mut evaluator = SearchEvaluator::<StubEnv>::new(&env_config, config)?;
    let evaluation = evaluator.evaluate(agent.as_mut())?;

    let acts = evaluator.env().map(|env| env.acts().to_vec()).unwrap_or_default();
    assert_eq!(acts.len(), 3);
    assert!(acts.iter().all(|a| {
        let [f, y] = a.to_array();
        (-1.0..=1.0).contains(&f) && (-1.0..=1.0).contains(&y)
    }));
    evaluator.close()?;

    let report = EvaluationReport::new(evaluation, TaskConfig::new("fg", 10253));
    assert_eq!(report.episodes.len(), 3);
    assert_eq!(report.summary.n_episodes, 3);
    assert_eq!(report.summary.time_expired, 3);
    assert_eq!(
        report.summary.found_target + report.summary.collided + report.summary.time_expired,
        3
    );

    let dir = TempDir::new("evaluate_random_agent")?;
    let path = dir.path().join("results.yaml");
    report.save(&path)?;
    let yaml = std::fs::read_to_string(&path)?;
    assert!(yaml.contains("number of episodes: 3"));
    assert!(yaml.contains("task configuration:"));

    let report_ = EvaluationReport::load(&path)?;
    assert_eq!(report_.episodes.len(), 3);
    assert_eq!(
        report_.task_config.get("base_port").and_then(|v| v.as_u64()),
        Some(10253)
    );
    Ok(())
}

#[test]
fn test_seeded_runs_are_reproducible() -> Result<()> {
    let run = || -> Result<Vec<[f32; 2]>> {
        let mut agent = default_registry()?.build(&random_agent_config()?)?;
        let env_config = StubEnvConfig::default().done_at(Some(5));
        let config = EvaluatorConfig::default()
            .n_episodes(4)
            .seed(Some(1234))
            .verbose(false);
        let mut evaluator = SearchEvaluator::<StubEnv>::new(&env_config, config)?;
        evaluator.evaluate(agent.as_mut())?;
        Ok(evaluator
            .env()
            .map(|env| env.acts().iter().map(|a| a.to_array()).collect())
            .unwrap_or_default())
    };
    let acts = run()?;
    assert_eq!(acts.len(), 20);
    assert_eq!(acts, run()?);
    Ok(())
}

#[test]
fn test_unknown_agent_name() -> Result<()> {
    let registry = default_registry()?;
    assert_eq!(registry.names(), vec!["RandomAgent", "RecurrentAgent"]);

    let err = registry.build(&AgentConfig::new("RllibAgent")).err().unwrap();
    assert!(matches!(
        err.downcast_ref::<SarError>(),
        Some(SarError::UnknownAgent(_, _))
    ));
    Ok(())
}
