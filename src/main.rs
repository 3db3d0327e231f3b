//! # Main Entry Point
//!
//! Initializes the planner:
//! - Domain: Configuration and Types
//! - Infrastructure: LLM client, Console
//! - Application: Assistant, Router, Session state
//! - Interface: CLI, Session loop, Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::sync::Mutex;

use crate::application::assistant::Assistant;
use crate::application::router::CommandRouter;
use crate::application::state::SessionState;
use crate::domain::config::AppConfig;
use crate::domain::traits::LlmProvider;
use crate::infrastructure::console::ConsoleService;
use crate::infrastructure::llm::Client as LlmClient;
use crate::interface::cli::{Cli, Command, ProjectArgs};
use crate::interface::commands;
use crate::interface::commands::plan::Trigger;
use crate::strings::logs;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let (config, config_path) = AppConfig::load(cli.config.as_deref())?;

    // 2. Logging Setup
    let log_dir = Path::new(&config.planner.log_dir);
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    }

    // Clear previous session log
    let log_path = log_dir.join("session.log");
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,hyper=warn,reqwest=warn"));

    // Layer for file (Always active)
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    // Console output belongs to the answers; logs only go to stderr on request
    let console_layer = if cli.verbose {
        Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    } else {
        None
    };

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("{}", logs::STARTING);
    match &config_path {
        Some(path) => tracing::info!("{}", logs::config_loaded(&path.display().to_string())),
        None => tracing::info!("{}", logs::CONFIG_DEFAULTS),
    }

    // 3. Initialize Infrastructure
    let agent = cli.agent.clone().unwrap_or_else(|| config.planner.agent.clone());
    if config.agent(&agent).is_none() {
        tracing::warn!("Agent '{}' is not defined in the configuration", agent);
    }
    tracing::info!("{}", logs::agent_selected(&agent));

    let llm: Arc<dyn LlmProvider> = Arc::new(LlmClient::new(config.clone()));

    // 4. Initialize Application Components
    let assistant = Arc::new(Assistant::new(config.clone(), agent, llm));
    let chat = ConsoleService::new("console");

    // 5. Dispatch
    match cli.command {
        None | Some(Command::Interactive) => {
            let state = new_session(&config, ProjectArgs::default(), cli.api_key);
            let router = CommandRouter::new(assistant, state);
            interface::session::run(&router, &chat, BufReader::new(tokio::io::stdin())).await?;
        }
        Some(Command::Plan(args)) => {
            run_trigger(Trigger::Plan, &config, args, cli.api_key, &assistant, &chat).await?
        }
        Some(Command::Cost(args)) => {
            run_trigger(Trigger::Cost, &config, args, cli.api_key, &assistant, &chat).await?
        }
        Some(Command::Schedule(args)) => {
            run_trigger(Trigger::Schedule, &config, args, cli.api_key, &assistant, &chat).await?
        }
        Some(Command::Resources(args)) => {
            run_trigger(Trigger::Resources, &config, args, cli.api_key, &assistant, &chat).await?
        }
        Some(Command::Ask { question }) => {
            let state = new_session(&config, ProjectArgs::default(), cli.api_key);
            commands::misc::handle_ask(&state, &assistant, &chat, &question.join(" ")).await?;
        }
    }

    Ok(())
}

fn new_session(config: &AppConfig, args: ProjectArgs, api_key: Option<String>) -> Arc<Mutex<SessionState>> {
    let project = args.apply(config.planner.defaults.to_details());
    Arc::new(Mutex::new(SessionState::new(project, api_key)))
}

async fn run_trigger(
    trigger: Trigger,
    config: &AppConfig,
    args: ProjectArgs,
    api_key: Option<String>,
    assistant: &Assistant,
    chat: &ConsoleService,
) -> Result<()> {
    let state = new_session(config, args, api_key);
    commands::plan::handle_trigger(trigger, &state, assistant, chat).await
}
