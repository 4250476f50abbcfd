//! # KW Telemetry
//!
//! Logging setup shared by the keyword server crates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kw_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `keyword-server` | Service name in log output |
//! | `KW_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directive |
//! | `KW_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `KW_JSON_LOGS` | `false` (`true` in containers) | JSON formatted events |

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use logging::{build_subscriber, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Invalid log filter `{directive}`: {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}
