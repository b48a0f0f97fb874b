//! A single evaluation episode.
use crate::{Env, EpisodeOutcome, SearchAgent, SearchInfo};
use anyhow::Result;
use log::{debug, trace};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Result of an episode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpisodeResult {
    /// Seed of the episode, if the evaluation is seeded.
    pub seed: Option<u32>,

    /// Found target, collided or ran out of steps.
    pub outcome: EpisodeOutcome,

    /// Index of the last step taken, starting from zero.
    pub steps: usize,

    /// Duration of the episode in seconds.
    pub time: f32,
}

/// Runs `agent` in `env` for one episode.
///
/// The environment and the agent are reset, then the agent acts until the environment
/// reports the end of the episode or [`Env::max_steps`] steps are taken. The outcome is
/// decided from the flags of the last step.
pub fn run_episode<E: Env + ?Sized>(
    env: &mut E,
    agent: &mut dyn SearchAgent,
    seed: Option<u32>,
    rng: &mut StdRng,
) -> Result<EpisodeResult> {
    let start = Instant::now();
    let mut obs = env.reset(seed.map(|s| s as u64))?;
    agent.reset();

    let mut steps = 0;
    let mut info = SearchInfo::default();

    for i in 0..env.max_steps() {
        let act = agent.act(&obs, rng)?;
        trace!("Step {}: {:?}", i, act);
        let step = env.step(&act)?;
        steps = i;
        info = step.info;

        if step.is_done() {
            break;
        }
        obs = step.obs;
    }

    let time = start.elapsed().as_secs_f32();
    let outcome = EpisodeOutcome::from_conditions(info.reached_goal, info.collided);
    debug!("Episode length: {:?}", steps);
    debug!("Outcome       : {}", outcome);

    Ok(EpisodeResult {
        seed,
        outcome,
        steps,
        time,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dummy::{StubEnv, StubEnvConfig},
        seed::episode_rng,
        Action, Observation,
    };

    struct Idle {
        n_resets: usize,
    }

    impl SearchAgent for Idle {
        fn reset(&mut self) {
            self.n_resets += 1;
        }

        fn act(&mut self, _obs: &Observation, _rng: &mut StdRng) -> Result<Action> {
            Ok(Action::default())
        }
    }

    fn run(config: StubEnvConfig) -> Result<(EpisodeResult, StubEnv, usize)> {
        let mut env = StubEnv::build(&config)?;
        let mut agent = Idle { n_resets: 0 };
        let result = run_episode(&mut env, &mut agent, Some(5), &mut episode_rng(Some(5)))?;
        Ok((result, env, agent.n_resets))
    }

    #[test]
    fn test_found_target() -> Result<()> {
        let config = StubEnvConfig::default().done_at(Some(3)).reached_goal(true);
        let (result, env, n_resets) = run(config)?;
        assert_eq!(result.outcome, EpisodeOutcome::FoundTarget);
        assert_eq!(result.steps, 2);
        assert_eq!(result.seed, Some(5));
        assert_eq!(env.n_steps(), 3);
        assert_eq!(env.seeds(), &[Some(5)]);
        assert_eq!(n_resets, 1);
        Ok(())
    }

    #[test]
    fn test_collided() -> Result<()> {
        let config = StubEnvConfig::default().done_at(Some(1)).collided(true);
        let (result, _, _) = run(config)?;
        assert_eq!(result.outcome, EpisodeOutcome::Collided);
        assert_eq!(result.steps, 0);
        Ok(())
    }

    #[test]
    fn test_step_budget() -> Result<()> {
        // Flags are only reported on the step that ends the episode
        let config = StubEnvConfig::default()
            .max_steps(10)
            .done_at(Some(20))
            .reached_goal(true);
        let (result, env, _) = run(config)?;
        assert_eq!(result.outcome, EpisodeOutcome::TimeExpired);
        assert_eq!(result.steps, 9);
        assert_eq!(env.n_steps(), 10);
        Ok(())
    }

    #[test]
    fn test_zero_step_budget() -> Result<()> {
        let config = StubEnvConfig::default().max_steps(0);
        let (result, env, _) = run(config)?;
        assert_eq!(result.outcome, EpisodeOutcome::TimeExpired);
        assert_eq!(result.steps, 0);
        assert_eq!(env.n_steps(), 0);
        Ok(())
    }
}
