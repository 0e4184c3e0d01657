//! Convenience re-exports for common use.

pub use crate::chat::{ChatSession, SessionSnapshot, GREETING};
pub use crate::config::AssistConfig;
pub use crate::demo::{DemoPhase, DemoScript, DemoSnapshot, ScriptedDemo};
pub use crate::error::{AssistError, Result};
pub use crate::insight::InsightFlow;
pub use crate::provider::{AssistantBackend, GeminiClient, ImagePayload};
pub use crate::typewriter::{Typewriter, TypingProgress};
pub use crate::types::{ChatMessage, ChatRole};
