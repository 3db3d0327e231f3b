//! Gemini provider
//!
//! Calls Google's `generateContent` endpoint with the API key passed as a query parameter.

use serde::{Deserialize, Serialize};

use super::{ProviderConfig, error_from_body, http_client};
use crate::domain::config::DEFAULT_GEMINI_MODEL;
use crate::infrastructure::llm::{Completion, Error, Query, Usage};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini API request format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
}

/// Gemini content (message)
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// Gemini content part
#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

/// Gemini API response format
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
}

/// Gemini response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

/// Gemini usage metadata
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

fn build_request(query: &Query) -> GeminiRequest {
    let text_content = |role: Option<&str>, text: &str| GeminiContent {
        role: role.map(str::to_string),
        parts: vec![GeminiPart {
            text: text.to_string(),
        }],
    };

    GeminiRequest {
        system_instruction: query.system.as_deref().map(|s| text_content(None, s)),
        contents: vec![text_content(Some("user"), &query.prompt)],
    }
}

/// Text of the first candidate, parts joined by newlines.
fn extract_text(response: &GeminiResponse) -> Result<String, Error> {
    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| Error::new("gemini", "No candidates in response"))?;

    let parts = candidate
        .content
        .as_ref()
        .map(|c| c.parts.as_slice())
        .unwrap_or_default();

    if parts.is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("UNKNOWN");
        return Err(Error::new(
            "gemini",
            format!("Response contained no text (finish reason: {})", reason),
        ));
    }

    Ok(parts
        .iter()
        .map(|part| part.text.as_str())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Execute a chat request using Gemini's API
pub async fn chat(config: ProviderConfig, query: Query) -> Result<Completion, Error> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let model = query.model.clone().unwrap_or_else(|| {
        if config.default_model.is_empty() {
            DEFAULT_GEMINI_MODEL.to_string()
        } else {
            config.default_model.clone()
        }
    });

    let url = format!("{}/v1beta/models/{}:generateContent", base_url, model);
    let request = build_request(&query);

    tracing::debug!("Gemini request: model={} contents={}", model, request.contents.len());

    let request_builder = http_client()
        .post(&url)
        .query(&[("key", config.api_key.as_str())])
        .json(&request);

    let response = config
        .apply_timeout(request_builder)
        .send()
        .await
        .map_err(|e| Error::new("gemini", format!("HTTP request failed: {}", e)))?;

    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());
        return Err(error_from_body("gemini", status, &error_text));
    }

    let gemini_response: GeminiResponse = response
        .json()
        .await
        .map_err(|e| Error::new("gemini", format!("Failed to parse response: {}", e)))?;

    let text = extract_text(&gemini_response)?;
    let usage = gemini_response.usage_metadata.unwrap_or_default();

    Ok(Completion {
        text,
        model,
        usage: Usage {
            input: usage.prompt_token_count,
            output: usage.candidates_token_count,
            total: usage.total_token_count,
        },
    })
}
