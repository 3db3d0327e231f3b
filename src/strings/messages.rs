//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes the fixed query outcomes, status updates, and usage hints.

use crate::domain::types::{FieldError, ProjectDetails};

/// Returned in place of an answer when no credential is configured
pub const NO_API_KEY: &str = "⚠ Please enter a valid API key first.";

/// Prefix for any failed model call
pub const ERROR_PREFIX: &str = "ERROR:";

pub fn query_failed(err: &str) -> String {
    format!("{ERROR_PREFIX} {err}")
}

pub const TITLE: &str = "🏗 BuildWise — AI Construction Planner";
pub const FOOTER: &str = "AI Construction Planner • Powered by Gemini";
pub const GENERATING_PLAN: &str = "Generating AI Plan...";
pub const UNKNOWN_COMMAND: &str = "❓ Unknown command. Type `.help` for the list.";
pub const API_KEY_SET: &str = "🔑 API key set for this session.";
pub const API_KEY_CLEARED: &str = "🔑 Session API key cleared.";
pub const GOODBYE: &str = "👋 Bye.";

pub const ASK_USAGE: &str = "Usage: `.ask <question>`";
pub const SET_USAGE: &str = "Usage: `.set <field> <value>` (fields: name, type, budget, duration, workers, materials, location)";
pub const KEY_USAGE: &str = "Usage: `.key <api key>` (`.key -` to clear)";

pub fn field_updated(field: &str, project: &ProjectDetails) -> String {
    format!("✅ Updated `{field}`.\n\n{}", project_summary(project))
}

pub fn invalid_field(err: &FieldError) -> String {
    format!("🚫 Invalid value: {err}")
}

pub fn project_summary(project: &ProjectDetails) -> String {
    let materials = if project.materials.is_empty() {
        "-".to_string()
    } else {
        project.materials.replace('\n', ", ")
    };
    format!(
        "**📋 Project Details**\n\
         * Name: {}\n\
         * Type: {}\n\
         * Budget (₹): {}\n\
         * Duration (days): {}\n\
         * Workers: {}\n\
         * Materials: {}\n\
         * Location: {}",
        or_dash(&project.name),
        project.project_type,
        project.budget,
        project.duration,
        project.workers,
        materials,
        or_dash(&project.location),
    )
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
