//! # Wizard Strings
//!
//! Strings and templates used by the interactive project wizard.

use crate::application::state::{WIZARD_STEPS, WizardStep};
use crate::domain::types::{MAX_WORKERS, MIN_BUDGET, MIN_WORKERS, ProjectDetails, ProjectType};

pub const WIZARD_CANCELLED: &str = "❌ Wizard Cancelled";
pub const WIZARD_DONE: &str =
    "### ✅ Project details saved\nRun `.plan`, `.cost`, `.schedule` or `.resources`.";

pub fn format_wizard_step(step: &WizardStep, buffer: &str, project: &ProjectDetails) -> String {
    let n = step.number();
    let mut output = match step {
        WizardStep::Name => format!(
            "### 🧙 New Project Wizard\n**Step {n}/{WIZARD_STEPS}: Project Name**\nEnter a name for the project."
        ),
        WizardStep::Type => {
            let options: Vec<String> = ProjectType::ALL
                .iter()
                .enumerate()
                .map(|(i, t)| format!("{}. {}", i + 1, t))
                .collect();
            format!(
                "**Step {n}/{WIZARD_STEPS}: Project Type**\n{}",
                options.join("\n")
            )
        }
        WizardStep::Budget => format!(
            "**Step {n}/{WIZARD_STEPS}: Budget (₹)**\nMinimum {MIN_BUDGET}."
        ),
        WizardStep::Duration => {
            format!("**Step {n}/{WIZARD_STEPS}: Duration (Days)**\nAt least 1 day.")
        }
        WizardStep::Workers => format!(
            "**Step {n}/{WIZARD_STEPS}: Workers**\nBetween {MIN_WORKERS} and {MAX_WORKERS}."
        ),
        WizardStep::Materials => format!(
            "**Step {n}/{WIZARD_STEPS}: Materials Required**\nOne or more lines. `.ok` to confirm."
        ),
        WizardStep::Location => format!("**Step {n}/{WIZARD_STEPS}: Location**"),
    };

    if let Some(current) = current_value(step, project) {
        output.push_str(&format!("\n_Enter to keep: {current}_"));
    }

    if !buffer.is_empty() {
        output.push_str("\n\n**Current Input:**\n```\n");
        output.push_str(buffer);
        output.push_str("\n```\n\nType `.ok` to finish this step.");
    }

    output
}

fn current_value(step: &WizardStep, project: &ProjectDetails) -> Option<String> {
    let value = match step {
        WizardStep::Name => project.name.clone(),
        WizardStep::Type => project.project_type.to_string(),
        WizardStep::Budget => project.budget.to_string(),
        WizardStep::Duration => project.duration.to_string(),
        WizardStep::Workers => project.workers.to_string(),
        WizardStep::Materials => return None,
        WizardStep::Location => project.location.clone(),
    };
    (!value.is_empty()).then_some(value)
}
