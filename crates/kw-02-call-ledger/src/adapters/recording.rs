use crate::domain::entities::LedgerEntry;
use crate::ports::outbound::LedgerSink;
use parking_lot::Mutex;

/// In-memory sink that keeps every entry in arrival order.
///
/// Useful for external listeners that need to inspect the global order.
#[derive(Debug, Default)]
pub struct RecordingLedgerSink {
    entries: Mutex<Vec<LedgerEntry>>,
}

impl RecordingLedgerSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all entries recorded so far
    pub fn entries(&self) -> Vec<LedgerEntry> {
        self.entries.lock().clone()
    }

    /// Counter values in arrival order
    pub fn counters(&self) -> Vec<u64> {
        self.entries.lock().iter().map(|e| e.counter).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl LedgerSink for RecordingLedgerSink {
    fn record(&self, entry: &LedgerEntry) {
        self.entries.lock().push(entry.clone());
    }
}
