//! Evaluator running episodes of the search task.
use super::{run_episode, Evaluation, Evaluator, EvaluatorConfig, Summary};
use crate::{
    error::SarError,
    seed::{episode_rng, episode_seeds},
    Env, SearchAgent,
};
use anyhow::Result;
use log::{info, warn};
use std::time::Instant;

/// Runs a fixed number of episodes sequentially and aggregates their outcomes.
///
/// The evaluator owns the environment for the whole run. The environment is closed by
/// [`SearchEvaluator::close`], or when the evaluator is dropped.
///
/// ```ignore
/// let config = EvaluatorConfig::default().n_episodes(10).seed(Some(42));
/// let mut evaluator = SearchEvaluator::<SearchEnv>::new(&env_config, config)?;
/// let evaluation = evaluator.evaluate(agent.as_mut())?;
/// evaluator.close()?;
/// ```
pub struct SearchEvaluator<E: Env> {
    config: EvaluatorConfig,

    /// `None` after the environment is closed.
    env: Option<E>,
}

impl<E: Env> SearchEvaluator<E> {
    /// Builds the environment and constructs the evaluator.
    pub fn new(env_config: &E::Config, config: EvaluatorConfig) -> Result<Self> {
        Ok(Self::from_env(E::build(env_config)?, config))
    }

    /// Constructs the evaluator with an already built environment.
    pub fn from_env(env: E, config: EvaluatorConfig) -> Self {
        Self {
            config,
            env: Some(env),
        }
    }

    /// The environment, or `None` if it is closed.
    pub fn env(&self) -> Option<&E> {
        self.env.as_ref()
    }

    /// Closes the environment.
    ///
    /// Calling this method more than once has no effect.
    pub fn close(&mut self) -> Result<()> {
        match self.env.take() {
            Some(mut env) => {
                info!("Close environment");
                env.close()
            }
            None => Ok(()),
        }
    }

    /// Seeds of the episodes, `None` for each episode if the evaluation is unseeded.
    fn seeds(&self) -> Vec<Option<u32>> {
        let n = self.config.n_episodes;
        match self.config.seed {
            Some(master) => episode_seeds(master, n).into_iter().map(Some).collect(),
            None => vec![None; n],
        }
    }
}

impl<E: Env> Evaluator for SearchEvaluator<E> {
    fn evaluate(&mut self, agent: &mut dyn SearchAgent) -> Result<Evaluation> {
        let seeds = self.seeds();
        let verbose = self.config.verbose;
        let n_episodes = self.config.n_episodes;
        let env = self.env.as_mut().ok_or(SarError::EnvClosed)?;

        let start = Instant::now();
        let mut results = Vec::with_capacity(n_episodes);

        for (ix, seed) in seeds.into_iter().enumerate() {
            if verbose {
                match seed {
                    Some(seed) => info!("Episode {}/{} (seed = {})", ix + 1, n_episodes, seed),
                    None => info!("Episode {}/{}", ix + 1, n_episodes),
                }
            }
            let mut rng = episode_rng(seed);
            let result = run_episode(env, agent, seed, &mut rng)?;
            if verbose {
                info!(
                    "{} after {} steps ({:.2} s)",
                    result.outcome, result.steps, result.time
                );
            }
            results.push(result);
        }

        let summary = Summary::from_results(&results, start.elapsed());
        if verbose {
            info!(
                "Found target in {}/{} episodes",
                summary.found_target, summary.n_episodes
            );
        }

        Ok(Evaluation { results, summary })
    }
}

impl<E: Env> Drop for SearchEvaluator<E> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close environment: {}", e);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dummy::{StubEnv, StubEnvConfig},
        Action, EpisodeOutcome, Observation,
    };
    use crate::Step;
    use rand::{rngs::StdRng, Rng};
    use std::{cell::Cell, rc::Rc};

    /// Shares its closed flag with the test.
    struct Watched {
        inner: StubEnv,
        closed: Rc<Cell<bool>>,
    }

    impl Env for Watched {
        type Config = StubEnvConfig;

        fn build(config: &Self::Config) -> Result<Self> {
            Ok(Self {
                inner: StubEnv::build(config)?,
                closed: Rc::new(Cell::new(false)),
            })
        }

        fn max_steps(&self) -> usize {
            self.inner.max_steps()
        }

        fn reset(&mut self, seed: Option<u64>) -> Result<Observation> {
            self.inner.reset(seed)
        }

        fn step(&mut self, act: &Action) -> Result<Step> {
            self.inner.step(act)
        }

        fn close(&mut self) -> Result<()> {
            self.closed.set(true);
            self.inner.close()
        }
    }

    /// Records the first random number of every episode.
    struct Noise {
        draws: Vec<f32>,
        first: bool,
    }

    impl SearchAgent for Noise {
        fn reset(&mut self) {
            self.first = true;
        }

        fn act(&mut self, _obs: &Observation, rng: &mut StdRng) -> Result<Action> {
            let v: f32 = rng.gen_range(-1.0..1.0);
            if self.first {
                self.draws.push(v);
                self.first = false;
            }
            Ok(Action::new(v, -v))
        }
    }

    fn noise() -> Noise {
        Noise {
            draws: vec![],
            first: true,
        }
    }

    fn evaluate(config: EvaluatorConfig) -> Result<(Evaluation, Vec<f32>, Vec<Option<u64>>)> {
        let env_config = StubEnvConfig::default().done_at(Some(2)).collided(true);
        let mut evaluator = SearchEvaluator::<StubEnv>::new(&env_config, config)?;
        let mut agent = noise();
        let evaluation = evaluator.evaluate(&mut agent)?;
        let seeds = evaluator.env().map(|e| e.seeds().to_vec()).unwrap_or_default();
        Ok((evaluation, agent.draws, seeds))
    }

    #[test]
    fn test_evaluate() -> Result<()> {
        let config = EvaluatorConfig::default().n_episodes(3).verbose(false);
        let (evaluation, _, seeds) = evaluate(config)?;
        assert_eq!(evaluation.results.len(), 3);
        assert_eq!(evaluation.summary.n_episodes, 3);
        assert_eq!(evaluation.summary.collided, 3);
        assert!(evaluation
            .results
            .iter()
            .all(|r| r.outcome == EpisodeOutcome::Collided && r.steps == 1));
        assert_eq!(seeds, vec![None, None, None]);
        assert!(evaluation.results.iter().all(|r| r.seed.is_none()));
        Ok(())
    }

    #[test]
    fn test_seeded_evaluation_is_reproducible() -> Result<()> {
        let config = EvaluatorConfig::default().n_episodes(4).seed(Some(42));
        let (evaluation1, draws1, seeds1) = evaluate(config.clone())?;
        let (evaluation2, draws2, seeds2) = evaluate(config)?;

        let expected: Vec<Option<u64>> = episode_seeds(42, 4)
            .into_iter()
            .map(|s| Some(s as u64))
            .collect();
        assert_eq!(seeds1, expected);
        assert_eq!(seeds1, seeds2);
        assert_eq!(draws1, draws2);
        assert_eq!(
            evaluation1.results.iter().map(|r| r.seed).collect::<Vec<_>>(),
            evaluation2.results.iter().map(|r| r.seed).collect::<Vec<_>>()
        );
        Ok(())
    }

    #[test]
    fn test_close() -> Result<()> {
        let mut evaluator =
            SearchEvaluator::<StubEnv>::new(&StubEnvConfig::default(), EvaluatorConfig::default())?;
        evaluator.close()?;
        evaluator.close()?;
        assert!(evaluator.env().is_none());

        let err = evaluator.evaluate(&mut noise()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SarError>(),
            Some(SarError::EnvClosed)
        ));
        Ok(())
    }

    #[test]
    fn test_drop_closes_env() -> Result<()> {
        let env = Watched::build(&StubEnvConfig::default())?;
        let closed = env.closed.clone();
        {
            let mut evaluator = SearchEvaluator::from_env(env, EvaluatorConfig::default());
            evaluator.evaluate(&mut noise())?;
            assert!(!closed.get());
        }
        assert!(closed.get());
        Ok(())
    }
}
