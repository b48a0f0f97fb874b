#![warn(missing_docs)]
//! Core of the search-and-rescue evaluation harness.
//!
//! A policy implementing [`SearchAgent`] is run in an environment implementing [`Env`]
//! for a number of episodes. Each episode ends when the agent finds the target, collides,
//! or runs out of steps; see [`EpisodeOutcome`]. [`SearchEvaluator`] runs the episodes,
//! aggregates a [`Summary`] and, together with the resolved [`TaskConfig`], produces an
//! [`EvaluationReport`] which can be written as YAML.
//!
//! Agents are selected by name through an [`AgentRegistry`], an explicit map from a name
//! to a constructor taking an [`AgentConfig`].
pub mod config;
pub mod dummy;
pub mod error;
pub mod evaluator;
mod outcome;
pub mod registry;
pub mod seed;

mod base;
pub use base::{Action, Env, Observation, SearchAgent, SearchInfo, Step};
pub use config::{AgentConfig, TaskConfig};
pub use error::SarError;
pub use evaluator::{
    run_episode, EpisodeResult, Evaluation, EvaluationReport, Evaluator, EvaluatorConfig,
    SearchEvaluator, Summary,
};
pub use outcome::EpisodeOutcome;
pub use registry::{AgentConstructor, AgentRegistry};
