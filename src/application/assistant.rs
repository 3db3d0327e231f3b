//! # Assistant
//!
//! The single model-query wrapper every trigger goes through.
//! Failures never propagate: the caller always gets text to render, either the answer,
//! the missing-credential warning, or `ERROR: <message>`.

use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::domain::traits::LlmProvider;
use crate::strings::{logs, messages};

pub struct Assistant {
    config: AppConfig,
    agent: String,
    llm: Arc<dyn LlmProvider>,
}

impl Assistant {
    pub fn new(config: AppConfig, agent: impl Into<String>, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            config,
            agent: agent.into(),
            llm,
        }
    }

    /// Session key first, then the agent's `api_key`, then its `api_key_env`.
    pub fn resolve_credential(&self, session_key: Option<&str>) -> Option<String> {
        if let Some(key) = session_key.map(str::trim).filter(|k| !k.is_empty()) {
            return Some(key.to_string());
        }
        self.config
            .agent(&self.agent)
            .and_then(|agent| agent.resolve_api_key())
    }

    /// Send one prompt and return the text to display.
    pub async fn ask(&self, session_key: Option<&str>, prompt: &str) -> String {
        let Some(api_key) = self.resolve_credential(session_key) else {
            tracing::warn!("{}", logs::query_rejected_no_key(&self.agent));
            return messages::NO_API_KEY.to_string();
        };

        match self.llm.completion(prompt, &self.agent, &api_key).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("{}", logs::query_failed(&self.agent, &e));
                messages::query_failed(&e)
            }
        }
    }
}
