//! Real-time driver
//!
//! Follows the wall clock instead of fast-forwarding: sleeps on a `smol`
//! timer until the next task is due, then advances the window's clock by
//! the same amount.

use std::time::{Duration, Instant};

use crate::Window;

/// Run timers in real time until none are pending. Returns the number of tasks run.
pub async fn run_realtime(window: &mut Window) -> usize {
    run_realtime_for(window, Duration::MAX).await
}

/// Like [`run_realtime`] but stops once `limit` of virtual time has passed
pub async fn run_realtime_for(window: &mut Window, limit: Duration) -> usize {
    let deadline = window.now().saturating_add(limit);
    let started = Instant::now();
    let mut ran = 0;

    while let Some(due) = window.next_timer_due() {
        if due > deadline {
            break;
        }
        let wait = due.saturating_sub(window.now());
        if !wait.is_zero() {
            smol::Timer::after(wait).await;
        }
        ran += window.advance(wait);
    }

    tracing::debug!(tasks = ran, elapsed = ?started.elapsed(), "real-time driver idle");
    ran
}

/// Blocking wrapper around [`run_realtime`]
pub fn block_on(window: &mut Window) -> usize {
    smol::block_on(run_realtime(window))
}
