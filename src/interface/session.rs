//! # Interactive Session
//!
//! Reads input line by line and hands each line to the `CommandRouter`.
//! Each line is fully handled (including its model call) before the next is read.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::application::router::{CommandRouter, RouteOutcome};
use crate::domain::traits::ChatProvider;
use crate::strings::{logs, messages};

pub async fn run<C, R>(router: &CommandRouter, chat: &C, reader: R) -> Result<()>
where
    C: ChatProvider,
    R: AsyncBufRead + Unpin,
{
    chat.send_message(&format!("{}\n\n{}", messages::TITLE, crate::strings::help::MAIN))
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut lines = reader.lines();
    loop {
        chat.ready_for_input()
            .await
            .map_err(|e| anyhow::anyhow!(e))?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            // EOF
            break;
        };

        match router.route(chat, &line).await {
            Ok(RouteOutcome::Quit) => break,
            Ok(RouteOutcome::Continue) => {}
            Err(e) => {
                // Output failures are not fatal to the session
                tracing::error!("Failed to route input: {:#}", e);
            }
        }
    }

    chat.send_notification(messages::FOOTER)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("{}", logs::SESSION_ENDED);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::assistant::Assistant;
    use crate::application::state::SessionState;
    use crate::application::test_support::{RecordingChat, ScriptedLlm, test_config};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[tokio::test]
    async fn test_scripted_session() {
        let llm = Arc::new(ScriptedLlm::replying("Timeline: 12 weeks"));
        let assistant = Arc::new(Assistant::new(test_config(Some("cfg-key")), "gemini", llm.clone()));
        let state = Arc::new(Mutex::new(SessionState::default()));
        let router = CommandRouter::new(assistant, state.clone());
        let chat = RecordingChat::default();

        let input: &[u8] = b".set type bridge\n.set duration 84\n.schedule\n.quit\n.cost\n";
        run(&router, &chat, input).await.unwrap();

        // `.cost` after `.quit` never runs
        let calls = llm.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].prompt,
            "Create construction timeline schedule for Bridge lasting 84 days"
        );
        assert!(chat.messages().await.contains(&"Timeline: 12 weeks".to_string()));
    }

    #[tokio::test]
    async fn test_eof_ends_session() {
        let llm = Arc::new(ScriptedLlm::replying("unused"));
        let assistant = Arc::new(Assistant::new(test_config(None), "gemini", llm));
        let state = Arc::new(Mutex::new(SessionState::default()));
        let router = CommandRouter::new(assistant, state);
        let chat = RecordingChat::default();

        let input: &[u8] = b".show";
        run(&router, &chat, input).await.unwrap();

        let sent = chat.messages().await;
        assert!(sent[0].starts_with(messages::TITLE));
        assert!(sent[1].contains("Project Details"));
    }
}
