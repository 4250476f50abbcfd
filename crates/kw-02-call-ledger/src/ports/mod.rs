//! Ports for the Shared Call Ledger

pub mod outbound;

pub use outbound::LedgerSink;
