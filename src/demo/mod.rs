//! Scripted chat simulation: a self-looping four-phase machine.
//!
//! No network and no user input — the loop narrates a canned
//! question/answer exchange through the [`Typewriter`] and fixed timers,
//! indefinitely, until stopped or dropped.

pub mod script;

pub use script::DemoScript;

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::typewriter::{Typewriter, TypingProgress};

/// The four phases of the simulation, exactly one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoPhase {
    /// The canned question is being typed out.
    Typing,
    /// The "thinking" indicator is pulsing.
    Loading,
    /// The recommendation card is showing.
    Result,
    /// Everything is faded out before the next loop.
    Idle,
}

/// Point-in-time observable state of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSnapshot {
    pub phase: DemoPhase,
    /// Increments on every re-entry into [`DemoPhase::Typing`]. Visuals
    /// keyed to an older generation must be discarded and rebuilt.
    pub generation: u64,
}

/// Self-looping demonstration of a question/answer exchange.
pub struct ScriptedDemo {
    script: Arc<DemoScript>,
    typewriter: Arc<Typewriter>,
    snapshot_tx: watch::Sender<DemoSnapshot>,
    driver: Mutex<Option<JoinHandle<()>>>,
}

impl ScriptedDemo {
    /// Start the loop immediately.
    pub fn start(script: DemoScript) -> Self {
        let typewriter = Arc::new(Typewriter::new(script.typing_speed, true));
        let (snapshot_tx, _) = watch::channel(DemoSnapshot {
            phase: DemoPhase::Idle,
            generation: 0,
        });
        let script = Arc::new(script);

        let driver = tokio::spawn(Self::run(
            script.clone(),
            typewriter.clone(),
            snapshot_tx.clone(),
        ));

        Self {
            script,
            typewriter,
            snapshot_tx,
            driver: Mutex::new(Some(driver)),
        }
    }

    /// Subscribe to phase/generation changes.
    pub fn snapshot(&self) -> watch::Receiver<DemoSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Subscribe to the question's reveal progress.
    pub fn typing(&self) -> watch::Receiver<TypingProgress> {
        self.typewriter.progress()
    }

    /// The script being narrated.
    pub fn script(&self) -> &DemoScript {
        &self.script
    }

    /// Stop the loop and cancel every pending timer.
    pub fn stop(&self) {
        if let Some(driver) = self.driver.lock().unwrap().take() {
            driver.abort();
        }
        self.typewriter.reset();
    }

    async fn run(
        script: Arc<DemoScript>,
        typewriter: Arc<Typewriter>,
        snapshot_tx: watch::Sender<DemoSnapshot>,
    ) {
        let mut generation: u64 = 0;
        loop {
            generation += 1;
            debug!(generation, "demo loop: typing");
            snapshot_tx.send_replace(DemoSnapshot {
                phase: DemoPhase::Typing,
                generation,
            });
            typewriter.restart(&script.question);
            typewriter.completed().await;
            tokio::time::sleep(script.pause_after_typing).await;

            snapshot_tx.send_replace(DemoSnapshot {
                phase: DemoPhase::Loading,
                generation,
            });
            tokio::time::sleep(script.loading_for).await;

            snapshot_tx.send_replace(DemoSnapshot {
                phase: DemoPhase::Result,
                generation,
            });
            tokio::time::sleep(script.result_for).await;

            snapshot_tx.send_replace(DemoSnapshot {
                phase: DemoPhase::Idle,
                generation,
            });
            tokio::time::sleep(script.idle_for).await;
        }
    }
}

impl Drop for ScriptedDemo {
    fn drop(&mut self) {
        self.stop();
    }
}
