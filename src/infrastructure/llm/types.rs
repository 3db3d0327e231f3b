//! Request and result types shared by the providers

use std::fmt;

/// A single planner query: one prompt, optionally preceded by a system instruction.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub system: Option<String>,
    pub prompt: String,
    /// Overrides the provider's default model
    pub model: Option<String>,
}

impl Query {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Blank instructions are dropped.
    pub fn with_system(mut self, system: Option<&str>) -> Self {
        self.system = system
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        if !model.is_empty() {
            self.model = Some(model.to_string());
        }
        self
    }

    /// Chat turns in send order: the system instruction, then the prompt.
    pub fn turns(&self) -> Vec<(&'static str, &str)> {
        let mut turns = Vec::with_capacity(2);
        if let Some(system) = self.system.as_deref() {
            turns.push(("system", system));
        }
        turns.push(("user", self.prompt.as_str()));
        turns
    }
}

/// Token counts reported by the provider, zero when absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub input: u32,
    pub output: u32,
    pub total: u32,
}

/// Generated text plus the model that produced it
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub model: String,
    pub usage: Usage,
}

/// Wire protocol spoken by an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAI,
    Gemini,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAI => "openai",
            Provider::Gemini => "gemini",
        }
    }

    /// Accepts the names used in `config.yaml`, case-insensitively.
    pub fn from_config(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Some(Provider::Gemini),
            "openai" | "openai-compatible" => Some(Provider::OpenAI),
            _ => None,
        }
    }
}

/// Provider failure. `message` is what the user sees after `ERROR:`.
#[derive(Debug)]
pub struct Error {
    pub provider: String,
    pub message: String,
}

impl Error {
    pub fn new(provider: &str, message: impl Into<String>) -> Self {
        Self {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.provider, self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_put_system_first() {
        let query = Query::new("Plan a bridge").with_system(Some("You are a civil engineer"));
        assert_eq!(
            query.turns(),
            vec![("system", "You are a civil engineer"), ("user", "Plan a bridge")]
        );
    }

    #[test]
    fn test_blank_system_and_model_ignored() {
        let query = Query::new("hi").with_system(Some("  ")).with_model("");
        assert!(query.system.is_none());
        assert!(query.model.is_none());
        assert_eq!(query.turns(), vec![("user", "hi")]);
    }
}
