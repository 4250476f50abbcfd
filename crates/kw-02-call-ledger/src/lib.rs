//! # KW-02: Shared Call Ledger
//!
//! Mutex-guarded monotonic call counter and diagnostic log, shared by every
//! concurrent caller for the lifetime of one dispatcher.
//!
//! ## Architecture
//!
//! - **Domain**: Origin tags, ledger entries, errors
//! - **Ports**: Outbound [`LedgerSink`] receiving each diagnostic entry
//! - **Adapters**: `tracing` sink (default) and in-memory recording sink
//! - **Ledger**: [`SharedCallLedger`] itself
//!
//! ## Ordering Guarantee
//!
//! Increment and sink emission happen inside one critical section, so every
//! listener sees entries in counter order with no gaps or duplicates,
//! regardless of how many threads call [`SharedCallLedger::log`].

pub mod adapters;
pub mod domain;
pub mod ledger;
pub mod ports;

pub use adapters::{RecordingLedgerSink, TracingLedgerSink};
pub use domain::entities::{LedgerEntry, LedgerSnapshot, Origin};
pub use domain::errors::LedgerError;
pub use ledger::SharedCallLedger;
pub use ports::outbound::LedgerSink;
