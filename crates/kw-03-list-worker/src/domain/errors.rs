//! Error types for the List Worker

use super::entities::WorkerId;
use crate::config::ConfigError;
use kw_01_ordered_list::StoreError;
use kw_02_call_ledger::LedgerError;
use thiserror::Error;

/// All errors that can end a worker run early
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    /// Store rejected an operation (capacity, use after destroy, ...)
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Ledger rejected a call
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Invalid worker config: {0}")]
    Config(#[from] ConfigError),

    /// Step value does not fit a single byte
    #[error("No value for step {step}")]
    ValueOutOfRange { step: usize },

    /// Stopped cooperatively at a step boundary
    #[error("{worker_id} cancelled after {steps_completed} steps")]
    Cancelled {
        worker_id: WorkerId,
        steps_completed: usize,
    },

    /// Bounded join elapsed; the worker was cancelled and reaped
    #[error("{worker_id} did not finish within {limit_ms}ms")]
    TimedOut { worker_id: WorkerId, limit_ms: u128 },

    /// Worker thread panicked
    #[error("{worker_id} panicked: {reason}")]
    Panicked { worker_id: WorkerId, reason: String },

    /// Could not place the worker on a thread
    #[error("Failed to spawn {worker_id}: {reason}")]
    SpawnFailed { worker_id: WorkerId, reason: String },
}
