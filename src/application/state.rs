//! # Session State
//!
//! Defines the transient state of one planner session (`SessionState`): the project form,
//! the wizard status and the credential entered during the session.
//! Nothing here is persisted; it lives as long as the session does.

use crate::domain::types::{ProjectDetails, ProjectField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Name,
    Type,
    Budget,
    Duration,
    Workers,
    Materials, // Accumulate until `.ok`
    Location,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Name;

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Name => Some(WizardStep::Type),
            WizardStep::Type => Some(WizardStep::Budget),
            WizardStep::Budget => Some(WizardStep::Duration),
            WizardStep::Duration => Some(WizardStep::Workers),
            WizardStep::Workers => Some(WizardStep::Materials),
            WizardStep::Materials => Some(WizardStep::Location),
            WizardStep::Location => None,
        }
    }

    pub fn field(&self) -> ProjectField {
        match self {
            WizardStep::Name => ProjectField::Name,
            WizardStep::Type => ProjectField::Type,
            WizardStep::Budget => ProjectField::Budget,
            WizardStep::Duration => ProjectField::Duration,
            WizardStep::Workers => ProjectField::Workers,
            WizardStep::Materials => ProjectField::Materials,
            WizardStep::Location => ProjectField::Location,
        }
    }

    /// 1-based position shown to the user
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Name => 1,
            WizardStep::Type => 2,
            WizardStep::Budget => 3,
            WizardStep::Duration => 4,
            WizardStep::Workers => 5,
            WizardStep::Materials => 6,
            WizardStep::Location => 7,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, WizardStep::Materials)
    }
}

pub const WIZARD_STEPS: usize = 7;

#[derive(Debug, Default, Clone)]
pub struct WizardState {
    pub active: bool,
    pub step: Option<WizardStep>,
    pub buffer: String, // For multi-line input
}

impl WizardState {
    pub fn start() -> Self {
        Self {
            active: true,
            step: Some(WizardStep::FIRST),
            buffer: String::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State for a single interactive session.
#[derive(Debug, Default, Clone)]
pub struct SessionState {
    pub project: ProjectDetails,
    pub wizard: WizardState,
    /// Credential entered with `.key` or `--api-key`; overrides the config
    pub api_key: Option<String>,
}

impl SessionState {
    pub fn new(project: ProjectDetails, api_key: Option<String>) -> Self {
        Self {
            project,
            wizard: WizardState::default(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }
}
