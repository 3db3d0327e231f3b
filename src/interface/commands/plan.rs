//! # Planning Triggers
//!
//! Handles `.plan`, `.cost`, `.schedule` and `.resources`.
//! Each builds one prompt from the current project form and renders one answer.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::assistant::Assistant;
use crate::application::state::SessionState;
use crate::domain::traits::ChatProvider;
use crate::domain::types::ProjectDetails;
use crate::strings::{logs, messages, prompts};

/// Which planning prompt to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Plan,
    Cost,
    Schedule,
    Resources,
}

impl Trigger {
    pub fn as_str(&self) -> &str {
        match self {
            Trigger::Plan => "plan",
            Trigger::Cost => "cost",
            Trigger::Schedule => "schedule",
            Trigger::Resources => "resources",
        }
    }

    pub fn build_prompt(&self, project: &ProjectDetails) -> String {
        match self {
            Trigger::Plan => prompts::plan_prompt(project),
            Trigger::Cost => prompts::cost_prompt(project),
            Trigger::Schedule => prompts::schedule_prompt(project),
            Trigger::Resources => prompts::resources_prompt(project),
        }
    }
}

pub async fn handle_trigger(
    trigger: Trigger,
    state: &Arc<Mutex<SessionState>>,
    assistant: &Assistant,
    chat: &impl ChatProvider,
) -> Result<()> {
    tracing::info!("{}", logs::trigger(trigger.as_str(), &chat.session_id()));

    let (prompt, api_key) = {
        let guard = state.lock().await;
        (trigger.build_prompt(&guard.project), guard.api_key.clone())
    };

    if trigger == Trigger::Plan {
        chat.send_notification(messages::GENERATING_PLAN)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    ask_and_render(assistant, chat, api_key.as_deref(), &prompt).await
}

/// One query, with the waiting indicator around it.
pub async fn ask_and_render(
    assistant: &Assistant,
    chat: &impl ChatProvider,
    api_key: Option<&str>,
    prompt: &str,
) -> Result<()> {
    chat.typing(true).await.map_err(|e| anyhow::anyhow!(e))?;
    let answer = assistant.ask(api_key, prompt).await;
    chat.typing(false).await.map_err(|e| anyhow::anyhow!(e))?;

    chat.send_message(&answer)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{RecordingChat, ScriptedLlm, Sent, test_config};
    use crate::domain::types::ProjectType;

    fn session(api_key: Option<&str>) -> Arc<Mutex<SessionState>> {
        let project = ProjectDetails {
            name: "Ring Road Phase 2".to_string(),
            project_type: ProjectType::Road,
            budget: 90_000_000,
            duration: 365,
            workers: 300,
            materials: "Bitumen".to_string(),
            location: "Indore".to_string(),
        };
        Arc::new(Mutex::new(SessionState::new(project, api_key.map(str::to_string))))
    }

    #[tokio::test]
    async fn test_cost_trigger_sends_cost_prompt() {
        let llm = Arc::new(ScriptedLlm::replying("₹9 crore total"));
        let assistant = Assistant::new(test_config(None), "gemini", llm.clone());
        let chat = RecordingChat::default();

        handle_trigger(Trigger::Cost, &session(Some("k")), &assistant, &chat)
            .await
            .unwrap();

        assert_eq!(
            llm.calls().await[0].prompt,
            "Estimate detailed construction cost breakdown for a Road with budget 90000000"
        );
        assert_eq!(
            chat.sent().await,
            vec![
                Sent::Typing(true),
                Sent::Typing(false),
                Sent::Message("₹9 crore total".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_plan_trigger_notifies_first() {
        let llm = Arc::new(ScriptedLlm::replying("# Plan"));
        let assistant = Assistant::new(test_config(None), "gemini", llm.clone());
        let chat = RecordingChat::default();

        handle_trigger(Trigger::Plan, &session(Some("k")), &assistant, &chat)
            .await
            .unwrap();

        let sent = chat.sent().await;
        assert_eq!(sent[0], Sent::Notification("Generating AI Plan...".to_string()));
        assert_eq!(chat.last_message().await.as_deref(), Some("# Plan"));
        assert!(llm.calls().await[0].prompt.contains("Location: Indore"));
    }

    #[tokio::test]
    async fn test_every_trigger_warns_without_credential() {
        let llm = Arc::new(ScriptedLlm::replying("unused"));
        let assistant = Assistant::new(test_config(None), "gemini", llm.clone());
        let state = session(None);

        for trigger in [Trigger::Plan, Trigger::Cost, Trigger::Schedule, Trigger::Resources] {
            let chat = RecordingChat::default();
            handle_trigger(trigger, &state, &assistant, &chat).await.unwrap();
            assert_eq!(chat.last_message().await.as_deref(), Some(messages::NO_API_KEY));
        }
        assert!(llm.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_failure_rendered_as_error() {
        let llm = Arc::new(ScriptedLlm::failing("HTTP request failed: connection refused"));
        let assistant = Assistant::new(test_config(None), "gemini", llm);
        let chat = RecordingChat::default();

        handle_trigger(Trigger::Schedule, &session(Some("k")), &assistant, &chat)
            .await
            .unwrap();

        assert_eq!(
            chat.last_message().await.as_deref(),
            Some("ERROR: HTTP request failed: connection refused")
        );
    }
}
