//! # Log Messages
//!
//! Format functions for internal log lines.

pub const STARTING: &str = "Starting BuildWise...";
pub const SESSION_ENDED: &str = "Interactive session ended";

pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub const CONFIG_DEFAULTS: &str = "No config file found, using built-in defaults";

pub fn agent_selected(agent: &str) -> String {
    format!("Using agent: {agent}")
}

pub fn trigger(name: &str, session: &str) -> String {
    format!("Trigger [{name}] in session {session}")
}

pub fn wizard_completed(session: &str, project: &str) -> String {
    format!("Wizard completed in session {session}: {project}")
}

pub fn query_rejected_no_key(agent: &str) -> String {
    format!("Query skipped: no API key for agent {agent}")
}

pub fn query_failed(agent: &str, err: &str) -> String {
    format!("Query failed on agent {agent}: {err}")
}
