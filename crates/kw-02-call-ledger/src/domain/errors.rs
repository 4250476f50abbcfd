//! Error types for the Shared Call Ledger

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Counter reached its maximum value
    #[error("Ledger counter exhausted")]
    CounterExhausted,
}
