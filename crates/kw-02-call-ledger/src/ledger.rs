//! The Shared Call Ledger

use crate::adapters::TracingLedgerSink;
use crate::domain::entities::{LedgerEntry, LedgerSnapshot, Origin};
use crate::domain::errors::LedgerError;
use crate::ports::outbound::LedgerSink;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Default)]
struct LedgerState {
    counter: u64,
    last_message: Option<String>,
}

/// Monotonic call counter plus last logged message, behind one lock.
///
/// Construct once and share by `Arc` with every component that logs.
pub struct SharedCallLedger {
    state: Mutex<LedgerState>,
    sink: Arc<dyn LedgerSink>,
}

impl SharedCallLedger {
    /// Ledger emitting through `tracing`
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingLedgerSink))
    }

    /// Ledger emitting through a custom sink
    pub fn with_sink(sink: Arc<dyn LedgerSink>) -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
            sink,
        }
    }

    /// Record one call and return the counter value before it.
    ///
    /// The increment and the sink emission share one critical section; the
    /// guard is released on every exit path, including a panicking sink.
    /// State is committed only after the sink returns, so a call whose
    /// emission panicked consumes no counter value.
    pub fn log(&self, origin: Origin, message: &str) -> Result<u64, LedgerError> {
        let mut state = self.state.lock();

        let previous = state.counter;
        let counter = previous
            .checked_add(1)
            .ok_or(LedgerError::CounterExhausted)?;

        self.sink.record(&LedgerEntry {
            counter,
            origin,
            message: message.to_owned(),
        });

        state.counter = counter;
        state.last_message = Some(message.to_owned());

        Ok(previous)
    }

    /// Current counter value
    pub fn counter(&self) -> u64 {
        self.state.lock().counter
    }

    /// Text of the most recent call, if any
    pub fn last_message(&self) -> Option<String> {
        self.state.lock().last_message.clone()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        let state = self.state.lock();
        LedgerSnapshot {
            counter: state.counter,
            last_message: state.last_message.clone(),
        }
    }
}

impl Default for SharedCallLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SharedCallLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCallLedger")
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}
