//! # Console Service Adapter
//!
//! Implements the `ChatProvider` trait for a terminal session.
//! Answers go to stdout so they can be piped; status notices and the
//! waiting indicator go to stderr.

use crate::domain::traits::ChatProvider;
use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, Stderr, Stdout};
use tokio::sync::Mutex;

const THINKING: &str = "⏳ Thinking...";
const INPUT_MARKER: &str = "> ";

pub struct ConsoleService {
    session: String,
    stdout: Mutex<Stdout>,
    stderr: Mutex<Stderr>,
}

impl ConsoleService {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            stdout: Mutex::new(tokio::io::stdout()),
            stderr: Mutex::new(tokio::io::stderr()),
        }
    }

    async fn write_stderr(&self, text: &str) -> Result<(), String> {
        let mut err = self.stderr.lock().await;
        err.write_all(text.as_bytes())
            .await
            .map_err(|e| e.to_string())?;
        err.flush().await.map_err(|e| e.to_string())
    }
}

#[async_trait]
impl ChatProvider for ConsoleService {
    fn session_id(&self) -> String {
        self.session.clone()
    }

    async fn send_message(&self, content: &str) -> Result<(), String> {
        tracing::debug!("Console [{}] message: {} chars", self.session, content.len());
        let mut out = self.stdout.lock().await;
        out.write_all(content.as_bytes())
            .await
            .map_err(|e| e.to_string())?;
        out.write_all(b"\n").await.map_err(|e| e.to_string())?;
        out.flush().await.map_err(|e| e.to_string())
    }

    async fn send_notification(&self, content: &str) -> Result<(), String> {
        self.write_stderr(&format!("{}\n", content)).await
    }

    async fn ready_for_input(&self) -> Result<(), String> {
        let mut out = self.stdout.lock().await;
        out.write_all(INPUT_MARKER.as_bytes())
            .await
            .map_err(|e| e.to_string())?;
        out.flush().await.map_err(|e| e.to_string())
    }

    async fn typing(&self, active: bool) -> Result<(), String> {
        if active {
            self.write_stderr(THINKING).await
        } else {
            // Wipe the indicator line
            let blank = " ".repeat(THINKING.chars().count());
            self.write_stderr(&format!("\r{}\r", blank)).await
        }
    }
}
