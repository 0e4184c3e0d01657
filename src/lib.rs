//! Onzy Assist — conversational engine for the Onzy marketing site.
//!
//! The AI-facing core of the site: a live chat session backed by Gemini,
//! the self-looping scripted chat simulation, the incremental text-reveal
//! renderer it drives, and the debounced single-field insight flow.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use onzy_assist::prelude::*;
//!
//! # async fn example() -> onzy_assist::error::Result<()> {
//! let config = AssistConfig::from_env()?;
//! let backend = Arc::new(GeminiClient::new(config));
//! let session = ChatSession::new(backend);
//! session.submit("Quais serviços vocês oferecem?").await;
//! for msg in session.messages() {
//!     println!("{}: {}", msg.role, msg.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod config;
pub mod demo;
pub mod error;
pub mod insight;
pub mod prelude;
pub mod provider;
pub mod typewriter;
pub mod types;
pub mod util;
