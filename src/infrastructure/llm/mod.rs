//! Simple LLM API wrapper for hosted generation endpoints
//!
//! This module provides a unified interface over the providers the planner can talk to
//! (Gemini by default, plus any OpenAI-compatible endpoint).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use buildwise::infrastructure::llm::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(app_config);
//!
//!     let completion = client.prompt("gemini", &api_key, "Estimate a house build").await?;
//!     println!("{}", completion.text);
//!
//!     Ok(())
//! }
//! ```

mod client;
pub mod providers;
mod types;

pub use client::Client;

pub use types::{Completion, Error, Provider, Query, Usage};
