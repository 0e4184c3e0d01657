//! Tests for the scripted demo loop, on a paused clock.

use std::time::Duration;

use onzy_assist::demo::{DemoPhase, DemoScript, DemoSnapshot, ScriptedDemo};
use tokio::sync::watch;

fn fast_script() -> DemoScript {
    DemoScript {
        typing_speed: Duration::from_millis(10),
        pause_after_typing: Duration::from_millis(100),
        loading_for: Duration::from_millis(250),
        result_for: Duration::from_millis(1200),
        idle_for: Duration::from_millis(100),
        ..DemoScript::default()
    }
}

/// Block until the given phase is observed, returning its generation.
async fn wait_for(rx: &mut watch::Receiver<DemoSnapshot>, phase: DemoPhase) -> u64 {
    loop {
        {
            let snap = rx.borrow_and_update();
            if snap.phase == phase {
                return snap.generation;
            }
        }
        rx.changed().await.unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn cycle_visits_every_phase_and_increments_generation() {
    let demo = ScriptedDemo::start(fast_script());
    let mut rx = demo.snapshot();

    assert_eq!(wait_for(&mut rx, DemoPhase::Typing).await, 1);
    assert_eq!(wait_for(&mut rx, DemoPhase::Loading).await, 1);
    assert_eq!(wait_for(&mut rx, DemoPhase::Result).await, 1);
    assert_eq!(wait_for(&mut rx, DemoPhase::Idle).await, 1);

    // One full cycle later the machine is typing again, one generation up.
    assert_eq!(wait_for(&mut rx, DemoPhase::Typing).await, 2);
}

#[tokio::test(start_paused = true)]
async fn phases_are_observed_strictly_in_cycle_order() {
    let demo = ScriptedDemo::start(fast_script());
    let mut rx = demo.snapshot();

    let mut seen = Vec::new();
    for _ in 0..9 {
        rx.changed().await.unwrap();
        seen.push(rx.borrow_and_update().phase);
    }

    assert_eq!(
        seen,
        vec![
            DemoPhase::Typing,
            DemoPhase::Loading,
            DemoPhase::Result,
            DemoPhase::Idle,
            DemoPhase::Typing,
            DemoPhase::Loading,
            DemoPhase::Result,
            DemoPhase::Idle,
            DemoPhase::Typing,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn reentering_typing_restarts_the_reveal_from_zero() {
    let demo = ScriptedDemo::start(fast_script());
    let mut rx = demo.snapshot();

    wait_for(&mut rx, DemoPhase::Result).await;
    let question_len = demo.script().question.chars().count();
    assert_eq!(demo.typing().borrow().revealed, question_len);

    assert_eq!(wait_for(&mut rx, DemoPhase::Typing).await, 2);
    assert_eq!(demo.typing().borrow().revealed, 0);
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_pending_timers() {
    let demo = ScriptedDemo::start(fast_script());
    let mut rx = demo.snapshot();

    wait_for(&mut rx, DemoPhase::Loading).await;
    demo.stop();
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_secs(60)).await;
    tokio::task::yield_now().await;

    // The loading timer never fired; the machine is frozen where it was
    // stopped.
    assert_eq!(rx.borrow_and_update().phase, DemoPhase::Loading);
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn drop_tears_the_loop_down() {
    let demo = ScriptedDemo::start(fast_script());
    let mut rx = demo.snapshot();

    wait_for(&mut rx, DemoPhase::Typing).await;
    drop(demo);
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_secs(60)).await;
    tokio::task::yield_now().await;

    assert_eq!(rx.borrow_and_update().phase, DemoPhase::Typing);
}
