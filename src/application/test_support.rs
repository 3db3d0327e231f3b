//! Test doubles for the domain traits.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, LlmProvider};

/// Config with one `gemini` agent whose env var is never set.
pub fn test_config(api_key: Option<&str>) -> AppConfig {
    let mut yaml = String::from(
        "agents:\n  gemini:\n    provider: gemini\n    model: gemini-2.5-flash\n    api_key_env: BUILDWISE_TEST_NEVER_SET\n",
    );
    if let Some(key) = api_key {
        yaml.push_str(&format!("    api_key: {key}\n"));
    }
    AppConfig::from_yaml(&yaml).unwrap()
}

#[derive(Debug, Clone)]
pub struct LlmCall {
    pub prompt: String,
    pub agent: String,
    pub api_key: String,
}

/// Returns a fixed reply (or error) and records every call.
pub struct ScriptedLlm {
    reply: Result<String, String>,
    calls: Mutex<Vec<LlmCall>>,
}

impl ScriptedLlm {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn calls(&self) -> Vec<LlmCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlm {
    async fn completion(&self, prompt: &str, agent: &str, api_key: &str) -> Result<String, String> {
        self.calls.lock().await.push(LlmCall {
            prompt: prompt.to_string(),
            agent: agent.to_string(),
            api_key: api_key.to_string(),
        });
        self.reply.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Message(String),
    Notification(String),
    Typing(bool),
}

/// Records everything rendered to it.
#[derive(Default)]
pub struct RecordingChat {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingChat {
    pub async fn sent(&self) -> Vec<Sent> {
        self.sent.lock().await.clone()
    }

    pub async fn messages(&self) -> Vec<String> {
        self.sent()
            .await
            .into_iter()
            .filter_map(|s| match s {
                Sent::Message(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub async fn last_message(&self) -> Option<String> {
        self.messages().await.pop()
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_message(&self, content: &str) -> Result<(), String> {
        self.sent.lock().await.push(Sent::Message(content.to_string()));
        Ok(())
    }

    async fn send_notification(&self, content: &str) -> Result<(), String> {
        self.sent
            .lock()
            .await
            .push(Sent::Notification(content.to_string()));
        Ok(())
    }

    async fn typing(&self, active: bool) -> Result<(), String> {
        self.sent.lock().await.push(Sent::Typing(active));
        Ok(())
    }

    fn session_id(&self) -> String {
        "test".to_string()
    }
}
