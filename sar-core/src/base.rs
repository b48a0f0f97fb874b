//! Core functionalities.
mod act;
mod agent;
mod env;
mod obs;
mod step;
pub use act::Action;
pub use agent::SearchAgent;
pub use env::Env;
pub use obs::Observation;
pub use step::{SearchInfo, Step};
