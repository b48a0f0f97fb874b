//! A wrapper of the search task environment on Python.
//!
//! [`SearchEnv`] is a wrapper of the search environment of `rl_navigation`, which runs a
//! photorealistic simulator (FlightGoggles), based on [`PyO3`](https://github.com/PyO3/pyo3).
//!
//! ## Observation
//!
//! Observation is a dictionary of arrays created in Python. Each array is cast to `float32`
//! and converted to `ndarray::ArrayD`, keyed by the field name in
//! [`Observation`](sar_core::Observation).
//!
//! ## Action
//!
//! [`Action`](sar_core::Action) is converted to a `float32` numpy array of shape `(2,)`,
//! holding the forward velocity and the yaw rate.
//!
//! ## Task configuration
//!
//! [`TaskConfig`](sar_core::TaskConfig) is serialized as JSON and loaded with `json.loads`,
//! then passed to the constructor of the environment class.
mod base;
mod config;
pub mod util;
pub use base::SearchEnv;
pub use config::SearchEnvConfig;
