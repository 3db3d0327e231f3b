//! # Command Router
//!
//! Routes interactive input to the appropriate command handler (in `interface/commands`).
//! It parses the command string (e.g., `.cost`) and dispatches it with the necessary context.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::assistant::Assistant;
use crate::application::state::SessionState;
use crate::domain::traits::ChatProvider;
use crate::interface::commands;
use crate::interface::commands::plan::Trigger;
use crate::interface::commands::wizard::WizardAction;
use crate::strings::{logs, messages};

/// What the session loop should do after a line was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Continue,
    Quit,
}

pub struct CommandRouter {
    assistant: Arc<Assistant>,
    state: Arc<Mutex<SessionState>>,
}

impl CommandRouter {
    pub fn new(assistant: Arc<Assistant>, state: Arc<Mutex<SessionState>>) -> Self {
        Self { assistant, state }
    }

    pub async fn route<C>(&self, chat: &C, message: &str) -> Result<RouteOutcome>
    where
        C: ChatProvider,
    {
        let msg = message.trim();

        let (cmd, args) = match msg.find(char::is_whitespace) {
            Some(idx) => (&msg[..idx], msg[idx..].trim()),
            None => (msg, ""),
        };

        // `.key` arguments are credentials; keep them out of the log
        let logged_args = if cmd == ".key" { "<redacted>" } else { args };
        tracing::info!(
            "Router dispatching cmd='{}' args='{}' session='{}'",
            cmd,
            logged_args,
            chat.session_id()
        );

        // 1. Active wizard intercepts everything except a few control commands
        let bypass_commands = [".new", ".cancel", ".help", ".quit", ".exit"];
        let is_wizard_active = !bypass_commands.contains(&cmd) && self.state.lock().await.wizard.active;

        if is_wizard_active {
            // Raw line, so leading/trailing spaces inside materials are the wizard's concern
            if let WizardAction::Completed =
                commands::wizard::handle_step(&self.state, chat, message).await?
            {
                let project = self.state.lock().await.project.name.clone();
                tracing::info!("{}", logs::wizard_completed(&chat.session_id(), &project));
            }
            return Ok(RouteOutcome::Continue);
        }

        // 2. Commands
        match cmd {
            "" => {}
            ".new" => commands::wizard::start(&self.state, chat).await?,
            ".cancel" => commands::wizard::cancel(&self.state, chat).await?,
            ".plan" => self.trigger(Trigger::Plan, chat).await?,
            ".cost" => self.trigger(Trigger::Cost, chat).await?,
            ".schedule" => self.trigger(Trigger::Schedule, chat).await?,
            ".resources" => self.trigger(Trigger::Resources, chat).await?,
            ".ask" => commands::misc::handle_ask(&self.state, &self.assistant, chat, args).await?,
            ".set" => commands::misc::handle_set(&self.state, chat, args).await?,
            ".show" => commands::misc::handle_show(&self.state, chat).await?,
            ".key" => commands::misc::handle_key(&self.state, chat, args).await?,
            ".help" => commands::misc::handle_help(chat).await?,
            ".quit" | ".exit" => {
                chat.send_notification(messages::GOODBYE)
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
                return Ok(RouteOutcome::Quit);
            }
            _ if !cmd.starts_with('.') => {
                // Plain text is a question for the assistant
                commands::misc::handle_ask(&self.state, &self.assistant, chat, msg).await?
            }
            _ => {
                chat.send_notification(messages::UNKNOWN_COMMAND)
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
        }

        Ok(RouteOutcome::Continue)
    }

    async fn trigger<C: ChatProvider>(&self, trigger: Trigger, chat: &C) -> Result<()> {
        commands::plan::handle_trigger(trigger, &self.state, &self.assistant, chat).await
    }
}
