//! Backend trait and the Gemini implementation.

pub mod google;
pub mod http;

pub use google::{GeminiClient, ImagePayload};

use async_trait::async_trait;

use crate::types::ChatMessage;

/// The fallback-absorbing text operations the UI flows depend on.
///
/// Implementations never raise: a transport or API failure is translated
/// into fixed, user-presentable Portuguese text before it leaves the
/// backend. The image-edit operation is deliberately not part of this
/// trait — it has no presentable fallback, so its failures must stay
/// observable (see [`GeminiClient::edit_image`]).
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// One conversational turn: the full prior history plus a new user
    /// message. Returns the assistant's reply text.
    async fn chat_turn(&self, history: &[ChatMessage], message: &str) -> String;

    /// One short marketing sentence about `topic`.
    async fn fast_insight(&self, topic: &str) -> String;
}
