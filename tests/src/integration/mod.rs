//! # Integration Scenarios
//!
//! Each module drives the public API of `kw-04-command-dispatch` and checks
//! effects observable in the lower crates (worker output, ledger order).

pub mod isolation;
pub mod rpc_round_trip;
