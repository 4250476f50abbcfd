//! Ledger sink adapters

mod recording;
mod tracing_sink;

pub use recording::RecordingLedgerSink;
pub use tracing_sink::TracingLedgerSink;
