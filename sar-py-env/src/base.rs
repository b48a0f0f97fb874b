//! Wrapper of the search task environment implemented in Python.
use crate::{
    util::{action_to_pyobj, mapping_to_pyobj, pyobj_to_info, pyobj_to_observation},
    SearchEnvConfig,
};
use anyhow::Result;
use log::{info, trace, warn};
use pyo3::{
    types::{IntoPyDict, PyDict},
    PyAny, PyObject, Python,
};
use sar_core::{Action, Env, Observation, SarError, Step};
use std::path::Path;

/// The target search task of the challenge, running the photorealistic simulator.
///
/// The Python class given in [`SearchEnvConfig`] is instantiated with the task
/// configuration as a dict. It follows the gym interface: `reset()` returns a dict of
/// arrays, `step(action)` returns `(obs, reward, done, info)` where `info` carries the
/// `reached_goal` and `collided` flags.
pub struct SearchEnv {
    env: PyObject,

    max_steps: usize,

    closed: bool,
}

/// Wraps `env` with the gym video recorder.
fn record_video<'py>(py: Python<'py>, env: &'py PyAny, dir: &Path) -> Result<&'py PyAny> {
    info!("Record videos in {:?}", dir);
    let wrappers = py.import("gym.wrappers")?;
    let kwargs = PyDict::new(py);
    kwargs.set_item("force", true)?;
    kwargs.set_item("video_callable", py.eval("lambda episode_id: True", None, None)?)?;
    let dir = dir.to_string_lossy().into_owned();
    Ok(wrappers.getattr("Monitor")?.call((env, dir), Some(kwargs))?)
}

impl SearchEnv {
    fn check_open(&self) -> Result<()> {
        match self.closed {
            true => Err(SarError::EnvClosed.into()),
            false => Ok(()),
        }
    }
}

impl Env for SearchEnv {
    type Config = SearchEnvConfig;

    fn build(config: &Self::Config) -> Result<Self> {
        Python::with_gil(|py| -> Result<Self> {
            // Libraries used for rendering read sys.argv, which can be empty in an
            // embedded interpreter.
            let locals = [("sys", py.import("sys")?)].into_py_dict(py);
            let _ = py.eval("sys.argv.insert(0, 'SearchEnv')", None, Some(locals))?;
            let ver = py.eval("sys.version", None, Some(locals))?;
            info!("Initialize SearchEnv");
            info!("Python version = {}", ver);

            let task = mapping_to_pyobj(py, config.task.as_mapping())?;
            let module = py.import(config.module.as_str())?;
            let env = module.getattr(config.class.as_str())?.call1((task,))?;

            // The step budget is read before wrapping, as wrappers may hide attributes
            let max_steps = match env.hasattr("max_steps")? {
                true => env.getattr("max_steps")?.extract()?,
                false => config.task.max_steps()?,
            };
            info!("Max steps = {}", max_steps);

            let env = match &config.video_dir {
                Some(dir) => record_video(py, env, dir)?,
                None => env,
            };

            Ok(SearchEnv {
                env: env.into(),
                max_steps,
                closed: false,
            })
        })
    }

    fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Resets the environment.
    ///
    /// If `seed` is given, `env.seed(seed)` is called before `env.reset()`.
    fn reset(&mut self, seed: Option<u64>) -> Result<Observation> {
        trace!("SearchEnv::reset()");
        self.check_open()?;

        Python::with_gil(|py| {
            if let Some(seed) = seed {
                let env = self.env.as_ref(py);
                if env.hasattr("seed")? {
                    env.call_method1("seed", (seed,))?;
                } else {
                    warn!("Environment does not support seeding");
                }
            }
            let obs = self.env.call_method0(py, "reset")?;
            pyobj_to_observation(py, obs.as_ref(py))
        })
    }

    fn step(&mut self, act: &Action) -> Result<Step> {
        trace!("SearchEnv::step()");
        self.check_open()?;

        Python::with_gil(|py| {
            let a_py = action_to_pyobj(py, act);
            let ret = self.env.call_method1(py, "step", (a_py,))?;
            let (obs, reward, done, info): (&PyAny, f32, &PyAny, &PyAny) =
                ret.as_ref(py).extract()?;

            Ok(Step::new(
                pyobj_to_observation(py, obs)?,
                reward,
                done.is_true()?,
                pyobj_to_info(info)?,
            ))
        })
    }

    /// Closes the environment and the simulator.
    ///
    /// Calling this method more than once has no effect.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        info!("Close SearchEnv");
        Python::with_gil(|py| {
            self.env.call_method0(py, "close")?;
            Ok(())
        })
    }
}

impl Drop for SearchEnv {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close SearchEnv: {}", e);
        }
    }
}
