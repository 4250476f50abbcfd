//! Cooperative cancellation for the list worker
//!
//! The worker observes the signal at every production step boundary and
//! stops there. Raising it never interrupts a step midway.

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cloneable cancellation flag shared between a worker and its owner
#[derive(Debug, Clone, Default)]
pub struct CancelSignal {
    inner: Arc<CancelInner>,
}

#[derive(Debug, Default)]
struct CancelInner {
    cancelled: Mutex<bool>,
    wakeup: Condvar,
}

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake any waiter
    pub fn cancel(&self) {
        let mut cancelled = self.inner.cancelled.lock();
        *cancelled = true;
        self.inner.wakeup.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.cancelled.lock()
    }

    /// Block for up to `interval`.
    ///
    /// Returns `true` as soon as cancellation is raised, `false` if the full
    /// interval elapsed without it.
    pub fn wait_for(&self, interval: Duration) -> bool {
        let deadline = Instant::now() + interval;
        let mut cancelled = self.inner.cancelled.lock();

        while !*cancelled {
            if self
                .inner
                .wakeup
                .wait_until(&mut cancelled, deadline)
                .timed_out()
            {
                break;
            }
        }

        *cancelled
    }
}
