//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for agent configurations and planner settings.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::types::{DEFAULT_WORKERS, MIN_BUDGET, MIN_DURATION, ProjectDetails, ProjectType};

pub const DEFAULT_AGENT: &str = "gemini";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const LOCAL_CONFIG_PATH: &str = "data/config.yaml";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_agents")]
    pub agents: AgentsConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            agents: default_agents(),
            planner: PlannerConfig::default(),
        }
    }
}

pub type AgentsConfig = HashMap<String, AgentConfig>;

#[derive(Debug, Deserialize, Clone)]
pub struct AgentConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Option<String>, // e.g. "GEMINI_API_KEY"
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Sent ahead of every prompt when set
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            endpoint: None,
            api_key: None,
            api_key_env: default_api_key_env(),
            timeout: None,
            system_prompt: None,
        }
    }
}

impl AgentConfig {
    /// Credential from the config entry itself, falling back to its env var.
    /// Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = non_blank(self.api_key.as_deref()) {
            return Some(key);
        }
        let env_var = self.api_key_env.as_deref()?;
        non_blank(std::env::var(env_var).ok().as_deref())
    }
}

/// Settings for the planner session itself.
#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Agent used for every query
    #[serde(default = "default_agent_name")]
    pub agent: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default)]
    pub defaults: ProjectDefaults,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            agent: default_agent_name(),
            log_dir: default_log_dir(),
            defaults: ProjectDefaults::default(),
        }
    }
}

/// Initial values of the project form.
#[derive(Debug, Deserialize, Clone)]
pub struct ProjectDefaults {
    #[serde(default)]
    pub project_type: ProjectType,
    #[serde(default = "default_budget")]
    pub budget: u64,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default = "default_workers")]
    pub workers: u32,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        Self {
            project_type: ProjectType::default(),
            budget: default_budget(),
            duration: default_duration(),
            workers: default_workers(),
        }
    }
}

impl ProjectDefaults {
    pub fn to_details(&self) -> ProjectDetails {
        ProjectDetails {
            project_type: self.project_type,
            budget: self.budget,
            duration: self.duration,
            workers: self.workers,
            ..ProjectDetails::default()
        }
    }
}

fn default_agents() -> AgentsConfig {
    let mut agents = HashMap::new();
    agents.insert(DEFAULT_AGENT.to_string(), AgentConfig::default());
    agents
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_api_key_env() -> Option<String> {
    Some(DEFAULT_API_KEY_ENV.to_string())
}

fn default_agent_name() -> String {
    DEFAULT_AGENT.to_string()
}

fn default_log_dir() -> String {
    "data".to_string()
}

fn default_budget() -> u64 {
    MIN_BUDGET
}

fn default_duration() -> u32 {
    MIN_DURATION
}

fn default_workers() -> u32 {
    DEFAULT_WORKERS
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl AppConfig {
    /// Parse a config file. The project defaults must satisfy the form constraints.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        config
            .planner
            .defaults
            .to_details()
            .validate()
            .context("Invalid planner.defaults")?;
        Ok(config)
    }

    /// Resolve the config file to use: explicit path, then `data/config.yaml`,
    /// then the user config dir. Returns built-in defaults when none exist.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        for candidate in config_candidates() {
            if candidate.exists() {
                let config = Self::from_file(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }

    pub fn agent(&self, name: &str) -> Option<&AgentConfig> {
        self.agents.get(name)
    }
}

fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_PATH)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("buildwise").join("config.yaml"));
    }
    candidates
}
