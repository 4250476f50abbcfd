//! # Keyword Server Test Suite
//!
//! Unified test crate for scenarios that span more than one crate.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support.rs            # Fixtures shared by the scenarios
//! └── integration/
//!     ├── keyword_flows.rs  # Dispatcher → worker → ledger, happy paths
//!     ├── isolation.rs      # Failing and timed-out runs vs. the shared ledger
//!     └── rpc_round_trip.rs # JSON params in, JSON result or fault out
//!
//! benches/core_benchmarks.rs  # Sorter and ledger throughput
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p kw-tests
//! cargo test -p kw-tests integration::isolation
//! KW_TEST_LOGS=1 KW_LOG_LEVEL=debug cargo test -p kw-tests -- --nocapture
//!
//! cargo bench -p kw-tests
//! ```

pub mod integration;
pub mod support;
