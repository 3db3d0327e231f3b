//! # Wizard Command Handler
//!
//! Handles the interactive project wizard: one form field per step.
//! Managed by `SessionState`'s `WizardState`.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::state::{SessionState, WizardState, WizardStep};
use crate::domain::traits::ChatProvider;
use crate::strings::{messages, wizard};

pub enum WizardAction {
    /// Wizard still running, or input was not meant for it
    Continue,
    /// Every field collected
    Completed,
}

/// `.new`: (re)start the wizard and render the first step.
pub async fn start(state: &Arc<Mutex<SessionState>>, chat: &impl ChatProvider) -> Result<()> {
    let text = {
        let mut guard = state.lock().await;
        guard.wizard = WizardState::start();
        render_current(&guard)
    };
    chat.send_message(&text)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

pub async fn cancel(state: &Arc<Mutex<SessionState>>, chat: &impl ChatProvider) -> Result<()> {
    state.lock().await.wizard.reset();
    chat.send_notification(wizard::WIZARD_CANCELLED)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

pub async fn handle_step(
    state: &Arc<Mutex<SessionState>>,
    chat: &impl ChatProvider,
    message: &str,
) -> Result<WizardAction> {
    let input = message.trim();

    let (reply, action) = {
        let mut guard = state.lock().await;
        let session = &mut *guard;

        if !session.wizard.active {
            return Ok(WizardAction::Continue);
        }

        let Some(step) = session.wizard.step else {
            session.wizard.reset();
            return Ok(WizardAction::Continue);
        };

        // Multi-line steps accumulate until `.ok`; an empty buffer keeps the current value
        if step.is_multiline() {
            if input != ".ok" {
                if input.is_empty() {
                    return Ok(WizardAction::Continue);
                }
                if !session.wizard.buffer.is_empty() {
                    session.wizard.buffer.push('\n');
                }
                session.wizard.buffer.push_str(input);
                (render_current(session), WizardAction::Continue)
            } else {
                let buffer = std::mem::take(&mut session.wizard.buffer);
                if buffer.is_empty() {
                    advance(session)
                } else {
                    apply(session, step, &buffer)
                }
            }
        } else if input.is_empty() {
            // Keep the current value
            advance(session)
        } else {
            apply(session, step, input)
        }
    };

    chat.send_message(&reply)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(action)
}

/// Store `value` in the step's field, re-prompting the same step when it is rejected.
fn apply(session: &mut SessionState, step: WizardStep, value: &str) -> (String, WizardAction) {
    match session.project.set_field(step.field(), value) {
        Ok(()) => advance(session),
        Err(e) => {
            let text = format!(
                "{}\n\n{}",
                messages::invalid_field(&e),
                wizard::format_wizard_step(&step, "", &session.project)
            );
            (text, WizardAction::Continue)
        }
    }
}

fn advance(session: &mut SessionState) -> (String, WizardAction) {
    let next = session.wizard.step.and_then(|s| s.next());
    match next {
        Some(step) => {
            session.wizard.step = Some(step);
            (render_current(session), WizardAction::Continue)
        }
        None => {
            session.wizard.reset();
            let text = format!(
                "{}\n\n{}",
                messages::project_summary(&session.project),
                wizard::WIZARD_DONE
            );
            (text, WizardAction::Completed)
        }
    }
}

fn render_current(session: &SessionState) -> String {
    match session.wizard.step {
        Some(step) => wizard::format_wizard_step(&step, &session.wizard.buffer, &session.project),
        None => messages::project_summary(&session.project),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::RecordingChat;
    use crate::domain::types::ProjectType;

    #[tokio::test]
    async fn test_full_walkthrough() {
        let state = Arc::new(Mutex::new(SessionState::default()));
        let chat = RecordingChat::default();

        start(&state, &chat).await.unwrap();
        assert!(chat.last_message().await.unwrap().contains("Project Name"));

        for line in ["Lakeview Mall", "5", "25000000", "400", "250", "Steel", "Glass"] {
            let action = handle_step(&state, &chat, line).await.unwrap();
            assert!(matches!(action, WizardAction::Continue));
        }
        assert_eq!(state.lock().await.wizard.step, Some(WizardStep::Materials));
        handle_step(&state, &chat, ".ok").await.unwrap();

        let action = handle_step(&state, &chat, "Bengaluru").await.unwrap();
        assert!(matches!(action, WizardAction::Completed));

        let guard = state.lock().await;
        assert!(!guard.wizard.active);
        assert_eq!(guard.project.name, "Lakeview Mall");
        assert_eq!(guard.project.project_type, ProjectType::Mall);
        assert_eq!(guard.project.budget, 25_000_000);
        assert_eq!(guard.project.duration, 400);
        assert_eq!(guard.project.workers, 250);
        assert_eq!(guard.project.materials, "Steel\nGlass");
        assert_eq!(guard.project.location, "Bengaluru");
        drop(guard);

        assert!(chat.last_message().await.unwrap().contains("Project details saved"));
    }

    #[tokio::test]
    async fn test_invalid_value_repeats_step() {
        let state = Arc::new(Mutex::new(SessionState::default()));
        let chat = RecordingChat::default();
        start(&state, &chat).await.unwrap();

        handle_step(&state, &chat, "Shed").await.unwrap();
        handle_step(&state, &chat, "castle").await.unwrap();

        assert_eq!(state.lock().await.wizard.step, Some(WizardStep::Type));
        let reply = chat.last_message().await.unwrap();
        assert!(reply.contains("unknown project type `castle`"));
        assert!(reply.contains("Project Type"));
    }

    #[tokio::test]
    async fn test_empty_input_keeps_default() {
        let state = Arc::new(Mutex::new(SessionState::default()));
        let chat = RecordingChat::default();
        start(&state, &chat).await.unwrap();

        // name, type, budget, duration, workers all kept
        for _ in 0..5 {
            handle_step(&state, &chat, "").await.unwrap();
        }

        let guard = state.lock().await;
        assert_eq!(guard.wizard.step, Some(WizardStep::Materials));
        assert_eq!(guard.project, crate::domain::types::ProjectDetails::default());
    }

    async fn at_materials_step(state: &Arc<Mutex<SessionState>>, chat: &RecordingChat) {
        start(state, chat).await.unwrap();
        for _ in 0..5 {
            handle_step(state, chat, "").await.unwrap();
        }
        assert_eq!(state.lock().await.wizard.step, Some(WizardStep::Materials));
    }

    #[tokio::test]
    async fn test_materials_echoes_each_line() {
        let state = Arc::new(Mutex::new(SessionState::default()));
        let chat = RecordingChat::default();
        at_materials_step(&state, &chat).await;

        handle_step(&state, &chat, "Cement").await.unwrap();
        assert!(chat.last_message().await.unwrap().contains("**Current Input:**\n```\nCement\n```"));

        handle_step(&state, &chat, "Rebar").await.unwrap();
        assert!(chat.last_message().await.unwrap().contains("```\nCement\nRebar\n```"));
    }

    #[tokio::test]
    async fn test_empty_materials_keeps_previous_value() {
        let state = Arc::new(Mutex::new(SessionState::default()));
        state.lock().await.project.materials = "Bricks".to_string();
        let chat = RecordingChat::default();
        at_materials_step(&state, &chat).await;

        handle_step(&state, &chat, ".ok").await.unwrap();

        let guard = state.lock().await;
        assert_eq!(guard.wizard.step, Some(WizardStep::Location));
        assert_eq!(guard.project.materials, "Bricks");
    }

    #[tokio::test]
    async fn test_inactive_wizard_ignores_input() {
        let state = Arc::new(Mutex::new(SessionState::default()));
        let chat = RecordingChat::default();

        let action = handle_step(&state, &chat, "hello").await.unwrap();
        assert!(matches!(action, WizardAction::Continue));
        assert!(chat.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_cancel_resets() {
        let state = Arc::new(Mutex::new(SessionState::default()));
        let chat = RecordingChat::default();
        start(&state, &chat).await.unwrap();
        cancel(&state, &chat).await.unwrap();
        assert!(!state.lock().await.wizard.active);
    }
}
