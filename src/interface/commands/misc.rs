//! # Miscellaneous Commands
//!
//! Handles `.ask`, `.set`, `.show`, `.key` and `.help`.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::assistant::Assistant;
use crate::application::state::SessionState;
use crate::domain::traits::ChatProvider;
use crate::interface::commands::plan::ask_and_render;
use crate::strings::{help, logs, messages};

/// Free-form question; sent as the prompt unchanged. A blank question does nothing but hint.
pub async fn handle_ask(
    state: &Arc<Mutex<SessionState>>,
    assistant: &Assistant,
    chat: &impl ChatProvider,
    args: &str,
) -> Result<()> {
    if args.trim().is_empty() {
        chat.send_notification(messages::ASK_USAGE)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    tracing::info!("{}", logs::trigger("ask", &chat.session_id()));

    let api_key = state.lock().await.api_key.clone();
    ask_and_render(assistant, chat, api_key.as_deref(), args).await
}

pub async fn handle_show(state: &Arc<Mutex<SessionState>>, chat: &impl ChatProvider) -> Result<()> {
    let summary = messages::project_summary(&state.lock().await.project);
    chat.send_message(&summary)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

/// `.set <field> <value>`
pub async fn handle_set(
    state: &Arc<Mutex<SessionState>>,
    chat: &impl ChatProvider,
    args: &str,
) -> Result<()> {
    let Some((field, value)) = args.trim().split_once(char::is_whitespace) else {
        chat.send_notification(messages::SET_USAGE)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    };

    let reply = {
        let mut guard = state.lock().await;
        match guard.project.set_named(field, value) {
            Ok(field) => messages::field_updated(field.as_str(), &guard.project),
            Err(e) => messages::invalid_field(&e),
        }
    };

    chat.send_message(&reply)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

/// `.key <value>` sets the session credential, `.key -` clears it.
pub async fn handle_key(
    state: &Arc<Mutex<SessionState>>,
    chat: &impl ChatProvider,
    args: &str,
) -> Result<()> {
    let key = args.trim();
    let reply = if key.is_empty() {
        messages::KEY_USAGE
    } else if key == "-" {
        state.lock().await.api_key = None;
        messages::API_KEY_CLEARED
    } else {
        state.lock().await.api_key = Some(key.to_string());
        messages::API_KEY_SET
    };

    chat.send_notification(reply)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

pub async fn handle_help(chat: &impl ChatProvider) -> Result<()> {
    chat.send_message(help::MAIN)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
