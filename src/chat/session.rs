//! Chat session state machine: at most one turn in flight.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::debug;

use crate::provider::AssistantBackend;
use crate::types::ChatMessage;

/// Fixed assistant greeting opening every session.
pub const GREETING: &str =
    "Olá! Sou a IA da Onzy. Como posso ajudar a transformar seu negócio hoje?";

/// Observable summary of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub busy: bool,
    pub message_count: usize,
    pub open: bool,
}

struct SessionState {
    messages: Vec<ChatMessage>,
    busy: bool,
    open: bool,
}

/// A live conversation with the assistant.
///
/// History is append-only and strictly alternates user/model after the
/// greeting. While a turn is in flight the session is busy and further
/// submissions are rejected outright, never queued. History lives and dies
/// with the session — recreating it starts over from the greeting.
pub struct ChatSession {
    backend: Arc<dyn AssistantBackend>,
    state: Mutex<SessionState>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
}

impl ChatSession {
    /// Create a session opening with the fixed greeting.
    pub fn new(backend: Arc<dyn AssistantBackend>) -> Self {
        let (snapshot_tx, _) = watch::channel(SessionSnapshot {
            busy: false,
            message_count: 1,
            open: false,
        });
        Self {
            backend,
            state: Mutex::new(SessionState {
                messages: vec![ChatMessage::model(GREETING)],
                busy: false,
                open: false,
            }),
            snapshot_tx,
        }
    }

    /// Snapshot of the conversation history.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.lock().unwrap().messages.clone()
    }

    /// Whether a turn is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.state.lock().unwrap().busy
    }

    /// Whether the chat widget is open.
    pub fn is_open(&self) -> bool {
        self.state.lock().unwrap().open
    }

    /// Open or close the chat widget. Pure UI state; a turn in flight is
    /// unaffected.
    pub fn set_open(&self, open: bool) {
        let mut state = self.state.lock().unwrap();
        state.open = open;
        self.publish(&state);
    }

    /// Subscribe to busy/history/visibility changes.
    pub fn watch(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Run one conversational turn.
    ///
    /// Returns `false` without touching history or the backend when the
    /// trimmed input is empty or a turn is already in flight. Otherwise the
    /// user message is appended, the session stays busy until the
    /// assistant's reply is appended (real or fallback — callers cannot
    /// tell the difference), and `true` is returned.
    pub async fn submit(&self, input: &str) -> bool {
        let text = input.trim();
        if text.is_empty() {
            return false;
        }

        // History *before* this turn, sent as context alongside the new
        // message.
        let history = {
            let mut state = self.state.lock().unwrap();
            if state.busy {
                debug!("submit rejected: session busy");
                return false;
            }
            let history = state.messages.clone();
            state.messages.push(ChatMessage::user(text));
            state.busy = true;
            self.publish(&state);
            history
        };

        let reply = self.backend.chat_turn(&history, text).await;

        let mut state = self.state.lock().unwrap();
        state.messages.push(ChatMessage::model(reply));
        state.busy = false;
        self.publish(&state);
        true
    }

    fn publish(&self, state: &SessionState) {
        self.snapshot_tx.send_replace(SessionSnapshot {
            busy: state.busy,
            message_count: state.messages.len(),
            open: state.open,
        });
    }
}
