//! A scripted environment used for tests.
use crate::{error::SarError, Action, Env, Observation, SearchInfo, Step};
use anyhow::Result;
use ndarray::{ArrayD, IxDyn};

/// Configuration of [`StubEnv`].
#[derive(Clone, Debug)]
pub struct StubEnvConfig {
    /// The maximum number of steps in an episode.
    pub max_steps: usize,

    /// The episode ends at this step, counted from one. `None` never ends the episode.
    pub done_at: Option<usize>,

    /// `reached_goal` flag reported at the last step.
    pub reached_goal: bool,

    /// `collided` flag reported at the last step.
    pub collided: bool,

    /// Names and shapes of observation fields. Values are zero.
    pub fields: Vec<(String, Vec<usize>)>,
}

impl Default for StubEnvConfig {
    fn default() -> Self {
        Self {
            max_steps: 400,
            done_at: Some(1),
            reached_goal: false,
            collided: false,
            fields: vec![
                ("depth".to_string(), vec![4, 4, 1]),
                ("grayscale".to_string(), vec![4, 4, 1]),
            ],
        }
    }
}

impl StubEnvConfig {
    /// Sets the maximum number of steps.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Sets the step at which the episode ends.
    pub fn done_at(mut self, v: Option<usize>) -> Self {
        self.done_at = v;
        self
    }

    /// Sets the `reached_goal` flag.
    pub fn reached_goal(mut self, v: bool) -> Self {
        self.reached_goal = v;
        self
    }

    /// Sets the `collided` flag.
    pub fn collided(mut self, v: bool) -> Self {
        self.collided = v;
        self
    }

    /// Sets the observation fields.
    pub fn fields(mut self, v: Vec<(String, Vec<usize>)>) -> Self {
        self.fields = v;
        self
    }
}

/// An environment that ends every episode at a fixed step with fixed flags.
///
/// It keeps the seeds and actions it received for inspection.
pub struct StubEnv {
    config: StubEnvConfig,
    count_steps: usize,
    n_steps: usize,
    seeds: Vec<Option<u64>>,
    acts: Vec<Action>,
    closed: bool,
}

impl StubEnv {
    /// Seeds given at every reset.
    pub fn seeds(&self) -> &[Option<u64>] {
        &self.seeds
    }

    /// All actions applied to the environment.
    pub fn acts(&self) -> &[Action] {
        &self.acts
    }

    /// The total number of steps over all episodes.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns `true` if [`Env::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn obs(&self) -> Observation {
        let mut obs = Observation::new();
        for (key, shape) in self.config.fields.iter() {
            obs.insert(key.clone(), ArrayD::zeros(IxDyn(shape)));
        }
        obs
    }
}

impl Env for StubEnv {
    type Config = StubEnvConfig;

    fn build(config: &Self::Config) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            count_steps: 0,
            n_steps: 0,
            seeds: vec![],
            acts: vec![],
            closed: false,
        })
    }

    fn max_steps(&self) -> usize {
        self.config.max_steps
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<Observation> {
        if self.closed {
            return Err(SarError::EnvClosed.into());
        }
        self.seeds.push(seed);
        self.count_steps = 0;
        Ok(self.obs())
    }

    fn step(&mut self, act: &Action) -> Result<Step> {
        if self.closed {
            return Err(SarError::EnvClosed.into());
        }
        self.count_steps += 1;
        self.n_steps += 1;
        self.acts.push(*act);

        let is_done = self.config.done_at == Some(self.count_steps);
        let info = match is_done {
            true => SearchInfo {
                reached_goal: self.config.reached_goal,
                collided: self.config.collided,
            },
            false => SearchInfo::default(),
        };
        Ok(Step::new(self.obs(), 0.0, is_done, info))
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
