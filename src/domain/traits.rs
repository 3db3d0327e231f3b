//! # Domain Traits
//!
//! Abstract interfaces for core system components (Chat, LLM).
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

/// Abstract interface for the surface answers are rendered on (e.g., Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Render a response or command result
    async fn send_message(&self, content: &str) -> Result<(), String>;

    /// Send a short status notice
    async fn send_notification(&self, content: &str) -> Result<(), String>;

    /// Show or clear a "waiting for the model" indicator
    async fn typing(&self, active: bool) -> Result<(), String>;

    /// Signal that the next line of input is expected
    async fn ready_for_input(&self) -> Result<(), String> {
        Ok(())
    }

    /// Identifier used in logs
    fn session_id(&self) -> String;
}

/// Abstract interface for an LLM Provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for `prompt` with the named agent, authenticated by `api_key`
    async fn completion(&self, prompt: &str, agent: &str, api_key: &str) -> Result<String, String>;
}
