//! Incremental text reveal with a per-character cadence.

use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default reveal cadence.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(50);

/// Observable state of one reveal pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingProgress {
    /// The full text being revealed.
    pub text: String,
    /// Characters revealed so far. Monotonically non-decreasing within a
    /// pass; resets to zero only on [`Typewriter::restart`].
    pub revealed: usize,
    /// Whether the pass has revealed the full text.
    pub complete: bool,
    show_cursor: bool,
}

impl TypingProgress {
    fn empty(show_cursor: bool) -> Self {
        Self {
            text: String::new(),
            revealed: 0,
            complete: true,
            show_cursor,
        }
    }

    /// The revealed prefix, with a cursor marker while still typing.
    pub fn rendered(&self) -> String {
        let prefix: String = self.text.chars().take(self.revealed).collect();
        if self.show_cursor && !self.complete {
            format!("{prefix}|")
        } else {
            prefix
        }
    }
}

/// Reveals a string one character at a time at a fixed cadence.
///
/// A pass is started (or replaced) with [`restart`](Self::restart);
/// progress is observed through [`progress`](Self::progress) and completion
/// awaited through [`completed`](Self::completed). Replacing or dropping
/// the typewriter aborts the in-flight pass, so no step can land on stale
/// state and no stale pass can signal completion.
pub struct Typewriter {
    speed: Duration,
    show_cursor: bool,
    progress_tx: watch::Sender<TypingProgress>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Typewriter {
    pub fn new(speed: Duration, show_cursor: bool) -> Self {
        let (progress_tx, _) = watch::channel(TypingProgress::empty(show_cursor));
        Self {
            speed,
            show_cursor,
            progress_tx,
            task: Mutex::new(None),
        }
    }

    /// Subscribe to reveal progress.
    pub fn progress(&self) -> watch::Receiver<TypingProgress> {
        self.progress_tx.subscribe()
    }

    /// Start revealing `text` from zero, aborting any in-flight pass.
    ///
    /// The new pass signals completion exactly once, after its last
    /// character; an aborted pass never signals at all.
    pub fn restart(&self, text: &str) {
        let mut task = self.task.lock().unwrap();
        if let Some(prev) = task.take() {
            prev.abort();
        }

        let total = text.chars().count();
        self.progress_tx.send_replace(TypingProgress {
            text: text.to_string(),
            revealed: 0,
            complete: total == 0,
            show_cursor: self.show_cursor,
        });

        if total == 0 {
            return;
        }

        let speed = self.speed;
        let tx = self.progress_tx.clone();
        *task = Some(tokio::spawn(async move {
            for step in 1..=total {
                tokio::time::sleep(speed).await;
                tx.send_modify(|p| {
                    p.revealed = step;
                    p.complete = step == total;
                });
            }
        }));
    }

    /// Abort the in-flight pass and clear the revealed content.
    pub fn reset(&self) {
        let mut task = self.task.lock().unwrap();
        if let Some(prev) = task.take() {
            prev.abort();
        }
        self.progress_tx
            .send_replace(TypingProgress::empty(self.show_cursor));
    }

    /// Resolve once the current pass has revealed its full text.
    ///
    /// Resolves immediately if the pass is already complete.
    pub async fn completed(&self) {
        let mut rx = self.progress_tx.subscribe();
        loop {
            if rx.borrow_and_update().complete {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        if let Some(task) = self.task.lock().unwrap().take() {
            task.abort();
        }
    }
}
