//! Handler that spawns one list worker per invocation and joins it.

use crate::domain::errors::DispatchError;
use crate::domain::result::{KeywordResult, ReturnValue, Status};
use crate::ports::outbound::KeywordHandler;
use async_trait::async_trait;
use kw_02_call_ledger::SharedCallLedger;
use kw_03_list_worker::{Worker, WorkerConfig, WorkerId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fixed return tuple of the list command
pub const LIST_WORKER_RETURN: [&str; 3] = ["one", "two", "three"];

/// Spawns exactly one [`Worker`] per call and blocks (bounded) until it ends.
///
/// The two string arguments are accepted and logged but do not parameterise
/// production.
#[derive(Debug)]
pub struct ListWorkerHandler {
    config: WorkerConfig,
    ledger: Arc<SharedCallLedger>,
    join_timeout: Duration,
    next_worker_id: AtomicU64,
}

impl ListWorkerHandler {
    pub fn new(config: WorkerConfig, ledger: Arc<SharedCallLedger>, join_timeout: Duration) -> Self {
        Self {
            config,
            ledger,
            join_timeout,
            next_worker_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl KeywordHandler for ListWorkerHandler {
    async fn execute(
        &self,
        command: &str,
        args: &[String],
    ) -> Result<KeywordResult, DispatchError> {
        let worker_id = WorkerId(self.next_worker_id.fetch_add(1, Ordering::Relaxed));
        debug!(command, %worker_id, ?args, "[kw-04] Creating writer worker");

        let handle = Worker::new(self.config.clone(), Arc::clone(&self.ledger))
            .spawn(worker_id)
            .map_err(|e| DispatchError::execution_failure(command, e.to_string()))?;

        let status = handle.join(self.join_timeout).await.map_err(|e| {
            warn!(command, %worker_id, error = %e, "[kw-04] Worker failed");
            DispatchError::execution_failure(command, e.to_string())
        })?;

        info!(
            command,
            %worker_id,
            sorted = %status.emitted_string(),
            "[kw-04] Completed join with writer worker"
        );

        Ok(KeywordResult::new(
            Status::Pass,
            format!("Executed {}", command),
            ReturnValue::Tuple(LIST_WORKER_RETURN.iter().map(|s| s.to_string()).collect()),
        ))
    }
}
