//! OpenAI-compatible API provider
//!
//! Supports OpenAI and any gateway exposing `/chat/completions` (Groq, Ollama, LiteLLM, ...)

use serde::{Deserialize, Serialize};

use super::{ProviderConfig, error_from_body, http_client};
use crate::infrastructure::llm::{Completion, Error, Query, Usage};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI API request format
#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

/// OpenAI API response format
#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
    #[serde(default)]
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenAIUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

/// Execute a chat request using OpenAI-compatible API
pub async fn chat(config: ProviderConfig, query: Query) -> Result<Completion, Error> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let model = query.model.clone().unwrap_or_else(|| {
        if config.default_model.is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            config.default_model.clone()
        }
    });

    let url = format!("{}/chat/completions", base_url);

    let request = OpenAIRequest {
        model: model.clone(),
        messages: query
            .turns()
            .into_iter()
            .map(|(role, content)| OpenAIMessage {
                role: role.to_string(),
                content: content.to_string(),
            })
            .collect(),
    };

    let request_builder = http_client()
        .post(&url)
        .bearer_auth(&config.api_key)
        .json(&request);

    let response = config
        .apply_timeout(request_builder)
        .send()
        .await
        .map_err(|e| Error::new("openai", format!("HTTP request failed: {}", e)))?;

    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());
        return Err(error_from_body("openai", status, &error_text));
    }

    let openai_response: OpenAIResponse = response
        .json()
        .await
        .map_err(|e| Error::new("openai", format!("Failed to parse response: {}", e)))?;

    let text = openai_response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| Error::new("openai", "No choices in response"))?;
    let usage = openai_response.usage.unwrap_or_default();

    Ok(Completion {
        text,
        model: openai_response.model.unwrap_or(model),
        usage: Usage {
            input: usage.prompt_tokens,
            output: usage.completion_tokens,
            total: usage.total_tokens,
        },
    })
}
