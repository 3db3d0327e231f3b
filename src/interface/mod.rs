//! # Interface Layer
//!
//! User-facing entry points: the command-line definition, the interactive
//! session loop and the command handlers both of them drive.

pub mod cli;
pub mod commands;
pub mod session;
