//! # Command Line
//!
//! Argument definitions. Project fields use the same bounds as the form.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::types::{MAX_WORKERS, ProjectDetails, ProjectType};

#[derive(Debug, Parser)]
#[command(name = "buildwise", version, about = "AI construction planner")]
pub struct Cli {
    /// Config file (defaults to data/config.yaml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API key for this run; overrides the config
    #[arg(long, global = true, env = "BUILDWISE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Agent from the config to query
    #[arg(long, global = true)]
    pub agent: Option<String>,

    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive session with the project wizard (default)
    Interactive,
    /// Generate the full plan: cost, schedule, resources, risks, optimizations
    Plan(ProjectArgs),
    /// Estimate a cost breakdown
    Cost(ProjectArgs),
    /// Generate a construction timeline
    Schedule(ProjectArgs),
    /// Plan resource allocation
    Resources(ProjectArgs),
    /// Ask a free-form construction question
    Ask {
        #[arg(trailing_var_arg = true)]
        question: Vec<String>,
    },
}

/// Project fields. Anything omitted falls back to the configured defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long = "type", value_enum)]
    pub project_type: Option<ProjectType>,

    /// Budget in ₹ (at least 10000)
    #[arg(long, value_parser = clap::value_parser!(u64).range(10_000..))]
    pub budget: Option<u64>,

    /// Duration in days (at least 1)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: Option<u32>,

    /// Number of workers (1 to 500)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_WORKERS as i64))]
    pub workers: Option<u32>,

    #[arg(long)]
    pub materials: Option<String>,

    #[arg(long)]
    pub location: Option<String>,
}

impl ProjectArgs {
    /// Overlay the given flags on `defaults`
    pub fn apply(self, defaults: ProjectDetails) -> ProjectDetails {
        ProjectDetails {
            name: self.name.unwrap_or(defaults.name),
            project_type: self.project_type.unwrap_or(defaults.project_type),
            budget: self.budget.unwrap_or(defaults.budget),
            duration: self.duration.unwrap_or(defaults.duration),
            workers: self.workers.unwrap_or(defaults.workers),
            materials: self.materials.unwrap_or(defaults.materials),
            location: self.location.unwrap_or(defaults.location),
        }
    }
}
