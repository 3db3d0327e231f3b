//! # Application Layer
//!
//! Contains the core logic and orchestration of the planner.
//! This includes the model-query wrapper, command routing and session state.

pub mod assistant;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
