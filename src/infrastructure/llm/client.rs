//! # LLM Client
//!
//! Provides the `Client` struct, which acts as the main entry point for LLM interactions.
//! It routes requests to the appropriate provider based on configuration.

use crate::domain::config::AppConfig;
use crate::domain::traits::LlmProvider;
use crate::infrastructure::llm::providers;
use crate::infrastructure::llm::{Completion, Error, Provider, Query};
use async_trait::async_trait;

/// Simple LLM client
pub struct Client {
    app_config: AppConfig,
}

impl Client {
    /// Create a new client from application configuration
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }

    /// Send a simple prompt to an agent
    ///
    /// # Arguments
    /// * `agent_name` - The agent name (e.g., "gemini", "local-llama")
    /// * `api_key` - Credential for this call
    /// * `prompt` - The prompt text
    pub async fn prompt(&self, agent_name: &str, api_key: &str, prompt: &str) -> Result<Completion, Error> {
        // Look up agent configuration by agent name
        let agent_config = self
            .app_config
            .agent(agent_name)
            .ok_or_else(|| Error::new(agent_name, "Agent not found"))?;

        let provider_type = Provider::from_config(&agent_config.provider)
            .ok_or_else(|| Error::new(&agent_config.provider, "Unknown provider"))?;

        let provider_config = providers::ProviderConfig::from_agent_config(agent_config, api_key)?;

        let query = Query::new(prompt)
            .with_system(agent_config.system_prompt.as_deref())
            .with_model(&agent_config.model);

        tracing::info!(
            "LLM request: agent={} provider={} prompt_chars={}",
            agent_name,
            provider_type.as_str(),
            prompt.chars().count()
        );

        let completion = providers::chat(provider_type, provider_config, query).await?;

        tracing::info!(
            "LLM response: model={} tokens={}+{}={}",
            completion.model,
            completion.usage.input,
            completion.usage.output,
            completion.usage.total
        );

        Ok(completion)
    }
}

#[async_trait]
impl LlmProvider for Client {
    async fn completion(&self, prompt: &str, agent_name: &str, api_key: &str) -> Result<String, String> {
        self.prompt(agent_name, api_key, prompt)
            .await
            .map(|c| c.text)
            .map_err(|e| {
                tracing::error!("LLM request failed: {}", e);
                e.message
            })
    }
}
