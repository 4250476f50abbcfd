//! # KW-03: List Worker
//!
//! Background producer that builds one ordered list per run, logs every
//! produced value through the shared ledger, sorts the list, prints it and
//! tears it down.
//!
//! ## Architecture
//!
//! - **Domain**: WorkerId, CompletionStatus, CancelSignal, errors
//! - **Application**: [`Worker`] run loop and [`WorkerHandle`] (owned spawn handle)
//! - **Config**: step count, step interval, first value, store limits
//!
//! ## Run Sequence
//!
//! ```text
//! for step in 0..steps:
//!     wait step_interval (cancellable)
//!     value = first_value + step
//!     store.append(value)
//!     ledger.log(Writer, value)
//! sort_descending(store)
//! print every value, head to tail
//! store.destroy()
//! ```

pub mod application;
pub mod config;
pub mod domain;

pub use application::worker::{Worker, WorkerHandle};
pub use config::{ConfigError, WorkerConfig};
pub use domain::cancel::CancelSignal;
pub use domain::entities::{CompletionStatus, WorkerId};
pub use domain::errors::WorkerError;
