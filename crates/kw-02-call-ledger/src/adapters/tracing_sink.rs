use crate::domain::entities::LedgerEntry;
use crate::ports::outbound::LedgerSink;
use tracing::info;

/// Default sink: one structured `info` event per ledger call
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLedgerSink;

impl LedgerSink for TracingLedgerSink {
    fn record(&self, entry: &LedgerEntry) {
        // `message` is the formatted line itself; the raw text goes in `text`
        info!(
            counter = entry.counter,
            origin = %entry.origin,
            text = %entry.message,
            "[kw-02] {} calling with message {}",
            entry.origin,
            entry.message
        );
    }
}
