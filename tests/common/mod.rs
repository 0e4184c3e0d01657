//! Shared test helpers and mock backend.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use onzy_assist::provider::AssistantBackend;
use onzy_assist::types::ChatMessage;

/// A mock backend that returns canned replies and records calls.
#[derive(Default)]
pub struct MockBackend {
    replies: Mutex<Vec<String>>,
    chat_calls: AtomicUsize,
    insight_calls: AtomicUsize,
    last_chat: Mutex<Option<(Vec<ChatMessage>, String)>>,
    last_insight: Mutex<Option<String>>,
    gate: Option<Arc<Notify>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every chat reply until `gate` is notified.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Default::default()
        }
    }

    /// Queue a reply, used by the next chat or insight call.
    pub fn queue_reply(&self, text: &str) {
        self.replies.lock().unwrap().push(text.to_string());
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }

    pub fn insight_calls(&self) -> usize {
        self.insight_calls.load(Ordering::SeqCst)
    }

    /// The (history, message) pair of the most recent chat call.
    pub fn last_chat(&self) -> Option<(Vec<ChatMessage>, String)> {
        self.last_chat.lock().unwrap().clone()
    }

    /// The topic of the most recent insight call.
    pub fn last_insight(&self) -> Option<String> {
        self.last_insight.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssistantBackend for MockBackend {
    async fn chat_turn(&self, history: &[ChatMessage], message: &str) -> String {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_chat.lock().unwrap() = Some((history.to_vec(), message.to_string()));
        if let Some(ref gate) = self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| "Resposta simulada.".to_string())
    }

    async fn fast_insight(&self, topic: &str) -> String {
        self.insight_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_insight.lock().unwrap() = Some(topic.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| "Frase simulada.".to_string())
    }
}
