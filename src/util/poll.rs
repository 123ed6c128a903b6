//! Cancellable fixed-interval polling bound to a view's lifetime.
//!
//! DESIGN
//! ======
//! Polling is a stateless-refresh policy, not a subscription: each tick
//! re-fetches and replaces state wholesale, and a missed or failed tick
//! just waits for the next one. The guard exists so unmount or a scope-key
//! change can stop the loop; without it, timers outlive their views.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle to a running poll loop; cancelling stops it at the next tick.
#[derive(Clone, Debug)]
pub struct PollGuard {
    alive: Arc<AtomicBool>,
}

impl PollGuard {
    /// A guard with no loop behind it, for non-browser builds.
    pub fn inert() -> Self {
        Self { alive: Arc::new(AtomicBool::new(false)) }
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        !self.alive.load(Ordering::Relaxed)
    }
}

/// Run `tick` every `interval` until the returned guard is cancelled.
///
/// The first tick fires after one full interval; callers wanting an
/// immediate fetch do that themselves before starting the loop.
#[cfg(feature = "hydrate")]
pub fn spawn_poll<F>(interval: std::time::Duration, tick: F) -> PollGuard
where
    F: Fn() + 'static,
{
    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(interval).await;
            if !alive_task.load(Ordering::Relaxed) {
                break;
            }
            tick();
        }
    });
    PollGuard { alive }
}

#[cfg(not(feature = "hydrate"))]
pub fn spawn_poll<F>(interval: std::time::Duration, tick: F) -> PollGuard
where
    F: Fn() + 'static,
{
    let _ = (interval, &tick);
    PollGuard::inert()
}
