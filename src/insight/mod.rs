//! Debounced single-field insight flow.
//!
//! Watches a text input (the visitor's business name) and, once the input
//! settles, asks the backend for one marketing sentence about it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::provider::AssistantBackend;
use crate::util::debounce::Debouncer;

/// Inputs this short or shorter never trigger an analysis.
const MIN_INPUT_LEN: usize = 3;
/// Quiet window before the analysis fires.
const DEBOUNCE_WINDOW: Duration = Duration::from_secs(1);

/// Debounced analysis of a single text input.
///
/// Rapid edits collapse: only the last input within the quiet window
/// reaches the backend.
pub struct InsightFlow {
    backend: Arc<dyn AssistantBackend>,
    debouncer: Debouncer,
    insight_tx: watch::Sender<Option<String>>,
}

impl InsightFlow {
    pub fn new(backend: Arc<dyn AssistantBackend>) -> Self {
        Self::with_window(backend, DEBOUNCE_WINDOW)
    }

    /// Override the quiet window. Tests use short windows.
    pub fn with_window(backend: Arc<dyn AssistantBackend>, window: Duration) -> Self {
        let (insight_tx, _) = watch::channel(None);
        Self {
            backend,
            debouncer: Debouncer::new(window),
            insight_tx,
        }
    }

    /// Note a new value of the watched input.
    ///
    /// Long enough inputs (re)schedule an analysis for when the input
    /// settles; clearing the input back below the threshold cancels any
    /// pending analysis instead.
    pub fn input_changed(&self, input: &str) {
        if input.chars().count() <= MIN_INPUT_LEN {
            self.debouncer.cancel();
            return;
        }

        let backend = self.backend.clone();
        let tx = self.insight_tx.clone();
        let topic = input.to_string();
        self.debouncer.call(move || async move {
            let text = backend.fast_insight(&topic).await;
            tx.send_replace(Some(text));
        });
    }

    /// Subscribe to the latest produced insight.
    pub fn insight(&self) -> watch::Receiver<Option<String>> {
        self.insight_tx.subscribe()
    }
}
