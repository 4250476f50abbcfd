//! Fixtures shared by the integration scenarios.

use kw_02_call_ledger::{RecordingLedgerSink, SharedCallLedger};
use kw_03_list_worker::WorkerConfig;
use kw_04_command_dispatch::{CommandDispatcher, DispatcherConfig};
use kw_telemetry::TelemetryConfig;
use std::sync::{Arc, Once};

static LOGGING: Once = Once::new();

/// Install global logging once per test binary.
///
/// Console output stays off unless `KW_TEST_LOGS` is set, so test output is
/// not interleaved with events by default.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let mut config = TelemetryConfig::for_crate("tests", "integration");
        config.console_output = std::env::var_os("KW_TEST_LOGS").is_some();
        if let Err(err) = kw_telemetry::init_logging(&config) {
            eprintln!("test logging not installed: {err}");
        }
    });
}

/// Worker settings without the streaming delay
pub fn fast_worker() -> WorkerConfig {
    WorkerConfig {
        step_interval_ms: 0,
        ..Default::default()
    }
}

pub fn fast_config() -> DispatcherConfig {
    DispatcherConfig {
        worker: fast_worker(),
        ..Default::default()
    }
}

/// Ledger whose entries can be inspected after the fact
pub fn recording_ledger() -> (Arc<SharedCallLedger>, Arc<RecordingLedgerSink>) {
    let sink = Arc::new(RecordingLedgerSink::new());
    let ledger = Arc::new(SharedCallLedger::with_sink(sink.clone()));
    (ledger, sink)
}

/// Dispatcher over a recording ledger
pub fn dispatcher_with(
    config: DispatcherConfig,
    ledger: &Arc<SharedCallLedger>,
) -> Arc<CommandDispatcher> {
    match CommandDispatcher::with_ledger(config, Arc::clone(ledger)) {
        Ok(dispatcher) => Arc::new(dispatcher),
        Err(err) => panic!("fixture config rejected: {err}"),
    }
}

/// True when `counters` is exactly `1..=n` in order
pub fn is_gapless(counters: &[u64]) -> bool {
    counters
        .iter()
        .enumerate()
        .all(|(index, counter)| *counter == index as u64 + 1)
}
