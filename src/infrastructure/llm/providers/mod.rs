//! # LLM Providers
//!
//! Contains implementations for specific LLM providers:
//! - Gemini (`generateContent`)
//! - OpenAI-compatible chat completions (OpenAI, Groq, local gateways)

mod gemini;
mod openai;

use reqwest::{Client, RequestBuilder};
use std::sync::OnceLock;
use std::time::Duration;

use crate::domain::config::AgentConfig;
use crate::infrastructure::llm::{Completion, Error, Provider, Query};

/// Configuration for a provider
#[derive(Clone)]
pub struct ProviderConfig {
    /// API key
    pub api_key: String,
    /// Base URL (for non-default endpoints)
    pub base_url: Option<String>,
    /// Default model
    pub default_model: String,
    /// Timeout in seconds, unlimited when unset
    pub timeout: Option<u64>,
}

impl ProviderConfig {
    /// The credential is resolved by the caller; the agent entry supplies everything else.
    pub fn from_agent_config(config: &AgentConfig, api_key: &str) -> Result<Self, Error> {
        if api_key.trim().is_empty() {
            return Err(Error::new(&config.provider, "No API key provided"));
        }

        Ok(Self {
            api_key: api_key.trim().to_string(),
            base_url: config
                .endpoint
                .as_ref()
                .map(|url| url.trim_end_matches('/').to_string()),
            default_model: config.model.clone(),
            timeout: config.timeout,
        })
    }

    fn apply_timeout(&self, request_builder: RequestBuilder) -> RequestBuilder {
        match self.timeout {
            Some(timeout_secs) => request_builder.timeout(Duration::from_secs(timeout_secs)),
            None => request_builder,
        }
    }
}

/// HTTP client reused across requests
fn http_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .build()
            .expect("Failed to create HTTP client")
    })
}

/// Pull `error.message` out of a JSON error body, falling back to the raw status and text.
fn error_from_body(provider: &str, status: reqwest::StatusCode, body: &str) -> Error {
    if let Ok(error_json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(error_msg) = error_json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return Error::new(provider, error_msg);
        }
    }

    Error::new(provider, format!("HTTP {}: {}", status, body))
}

/// Execute a chat request with the specified provider
pub async fn chat(
    provider: Provider,
    config: ProviderConfig,
    query: Query,
) -> Result<Completion, Error> {
    match provider {
        Provider::OpenAI => openai::chat(config, query).await,
        Provider::Gemini => gemini::chat(config, query).await,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_config_requires_key() {
        let agent = AgentConfig::default();
        assert!(ProviderConfig::from_agent_config(&agent, "  ").is_err());

        let config = ProviderConfig::from_agent_config(&agent, " abc ").unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.default_model, "gemini-2.5-flash");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_provider_config_trims_endpoint() {
        let agent = AgentConfig {
            endpoint: Some("http://localhost:8080/".to_string()),
            timeout: Some(5),
            ..AgentConfig::default()
        };
        let config = ProviderConfig::from_agent_config(&agent, "k").unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.timeout, Some(5));
    }

    #[test]
    fn test_timeout_only_when_configured() {
        let mut config = ProviderConfig::from_agent_config(&AgentConfig::default(), "k").unwrap();

        let request = config
            .apply_timeout(http_client().get("http://localhost/"))
            .build()
            .unwrap();
        assert_eq!(request.timeout(), None);

        config.timeout = Some(30);
        let request = config
            .apply_timeout(http_client().get("http://localhost/"))
            .build()
            .unwrap();
        assert_eq!(request.timeout(), Some(&Duration::from_secs(30)));
    }

    #[test]
    fn test_error_from_body() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        let err = error_from_body("gemini", status, r#"{"error":{"message":"API key not valid"}}"#);
        assert_eq!(err.message, "API key not valid");

        let err = error_from_body("gemini", status, "plain text");
        assert_eq!(err.message, "HTTP 400 Bad Request: plain text");
    }
}
