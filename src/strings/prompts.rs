//! # Prompts
//!
//! Builds the natural-language prompts sent to the model, one per trigger.
//! Field values are interpolated verbatim.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::domain::types::ProjectDetails;

pub const PLAN_TEMPLATE: &str = include_str!("../../prompts/plan.md");
pub const COST_TEMPLATE: &str =
    "Estimate detailed construction cost breakdown for a {{PROJECT_TYPE}} with budget {{BUDGET}}";
pub const SCHEDULE_TEMPLATE: &str =
    "Create construction timeline schedule for {{PROJECT_TYPE}} lasting {{DURATION}} days";
pub const RESOURCES_TEMPLATE: &str =
    "Plan resource allocation for {{WORKERS}} workers building a {{PROJECT_TYPE}}";

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([A-Z_]+)\}\}").expect("placeholder regex"))
}

/// A builder for rendering prompts with context.
pub struct PromptRenderer<'a> {
    template: &'a str,
    replacements: Vec<(&'a str, String)>,
}

impl<'a> PromptRenderer<'a> {
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            replacements: Vec::new(),
        }
    }

    /// Bind `{{KEY}}` to `value`
    pub fn set(mut self, key: &'a str, value: impl Into<String>) -> Self {
        self.replacements.push((key, value.into()));
        self
    }

    /// Substitute in a single pass, so values containing `{{...}}` are never re-expanded.
    pub fn render(self) -> String {
        placeholder_regex()
            .replace_all(self.template, |caps: &Captures| {
                let key = &caps[1];
                match self.replacements.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => value.clone(),
                    None => {
                        tracing::error!(
                            "[PROMPT RENDER ERROR] Unreplaced placeholder found in output: {}",
                            &caps[0]
                        );
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }
}

fn with_project<'a>(template: &'a str, project: &ProjectDetails) -> PromptRenderer<'a> {
    PromptRenderer::new(template)
        .set("PROJECT_NAME", project.name.clone())
        .set("PROJECT_TYPE", project.project_type.as_str())
        .set("BUDGET", project.budget.to_string())
        .set("DURATION", project.duration.to_string())
        .set("WORKERS", project.workers.to_string())
        .set("MATERIALS", project.materials.clone())
        .set("LOCATION", project.location.clone())
}

/// Full plan: cost, schedule, resources, risks and optimizations
pub fn plan_prompt(project: &ProjectDetails) -> String {
    with_project(PLAN_TEMPLATE, project).render()
}

pub fn cost_prompt(project: &ProjectDetails) -> String {
    with_project(COST_TEMPLATE, project).render()
}

pub fn schedule_prompt(project: &ProjectDetails) -> String {
    with_project(SCHEDULE_TEMPLATE, project).render()
}

pub fn resources_prompt(project: &ProjectDetails) -> String {
    with_project(RESOURCES_TEMPLATE, project).render()
}
