//! Structured logging setup.
//!
//! Events go through one `tracing-subscriber` registry: an `EnvFilter` built
//! from the configured directive plus, when console output is on, a fmt layer
//! in either plain or JSON form.

use crate::{TelemetryConfig, TelemetryError};
use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer};

/// Build the subscriber described by `config` without installing it.
///
/// Use with `tracing::subscriber::with_default` to scope logging to a test
/// or a single thread.
pub fn build_subscriber(
    config: &TelemetryConfig,
) -> Result<Box<dyn Subscriber + Send + Sync>, TelemetryError> {
    let env_filter =
        EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::InvalidFilter {
            directive: config.log_level.clone(),
            reason: e.to_string(),
        })?;

    let fmt_layer = match (config.console_output, config.json_logs) {
        (false, _) => None,
        // JSON output for containers
        (true, true) => Some(
            fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        ),
        (true, false) => Some(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .boxed(),
        ),
    };

    Ok(Box::new(
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer),
    ))
}

/// Install the subscriber described by `config` as the global default.
///
/// Fails with [`TelemetryError::AlreadyInitialized`] if any global subscriber
/// is already set.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let subscriber = build_subscriber(config)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| TelemetryError::AlreadyInitialized)?;

    tracing::info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}
