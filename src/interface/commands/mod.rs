//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., .plan, .cost, .ask).
//! These handlers are invoked by the Router and by the one-shot CLI subcommands.

pub mod misc;
pub mod plan;
pub mod wizard;
