//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::LedgerEntry;

/// Receives one diagnostic entry per ledger call.
///
/// Invoked while the ledger lock is held, so implementations observe entries
/// in strict counter order. Implementations must not call back into the
/// ledger.
pub trait LedgerSink: Send + Sync {
    fn record(&self, entry: &LedgerEntry);
}
