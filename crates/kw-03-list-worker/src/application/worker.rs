//! List Worker
//!
//! Produces items into a private store, drives the shared ledger, sorts,
//! prints and destroys the store.

use crate::config::WorkerConfig;
use crate::domain::cancel::CancelSignal;
use crate::domain::entities::{CompletionStatus, WorkerId};
use crate::domain::errors::WorkerError;
use kw_01_ordered_list::{sort_descending, ListItem, OrderedListStore};
use kw_02_call_ledger::{Origin, SharedCallLedger};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

/// List worker.
///
/// One run owns exactly one [`OrderedListStore`] from creation to destroy.
/// Runs are not restartable mid-way; cancellation stops at the next step
/// boundary.
#[derive(Debug, Clone)]
pub struct Worker {
    config: WorkerConfig,
    ledger: Arc<SharedCallLedger>,
    cancel: CancelSignal,
}

impl Worker {
    /// Create a worker logging into `ledger`
    pub fn new(config: WorkerConfig, ledger: Arc<SharedCallLedger>) -> Self {
        Self {
            config,
            ledger,
            cancel: CancelSignal::new(),
        }
    }

    pub fn cancel_signal(&self) -> CancelSignal {
        self.cancel.clone()
    }

    /// Execute one full run on the calling thread.
    pub fn run(&self, id: WorkerId) -> Result<CompletionStatus, WorkerError> {
        self.config.validate()?;

        info!(
            worker_id = %id,
            steps = self.config.steps,
            "[kw-03] Worker starting"
        );

        let mut store = OrderedListStore::with_config(&self.config.store);

        if let Err(err) = self.produce(id, &mut store) {
            // Failed or cancelled runs still release what they produced
            if let Err(destroy_err) = store.destroy() {
                warn!(worker_id = %id, error = %destroy_err, "[kw-03] Destroy after abort failed");
            }
            warn!(worker_id = %id, error = %err, "[kw-03] Worker aborted");
            return Err(err);
        }

        let sort = sort_descending(&mut store)?;
        let emitted = Self::print_values(id, &store)?;
        let items_released = store.destroy()?;

        info!(
            worker_id = %id,
            items = items_released,
            passes = sort.passes,
            swaps = sort.swaps,
            "[kw-03] ✓ Worker done"
        );

        Ok(CompletionStatus {
            worker_id: id,
            success: true,
            emitted,
            items_released,
            sort,
        })
    }

    /// Run on the runtime's blocking pool and return the owned handle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self, id: WorkerId) -> Result<WorkerHandle, WorkerError> {
        let runtime = Handle::try_current().map_err(|e| WorkerError::SpawnFailed {
            worker_id: id,
            reason: e.to_string(),
        })?;

        let cancel = self.cancel.clone();
        let join = runtime.spawn_blocking(move || self.run(id));

        debug!(worker_id = %id, "[kw-03] Worker spawned");
        Ok(WorkerHandle { id, cancel, join })
    }

    fn produce(&self, id: WorkerId, store: &mut OrderedListStore) -> Result<(), WorkerError> {
        let interval = self.config.step_interval();

        for step in 0..self.config.steps {
            if self.cancel.wait_for(interval) {
                return Err(WorkerError::Cancelled {
                    worker_id: id,
                    steps_completed: step,
                });
            }

            let value = self
                .config
                .value_for_step(step)
                .ok_or(WorkerError::ValueOutOfRange { step })?;
            let item = ListItem::new(value);

            store.append(item)?;
            self.ledger
                .log(Origin::Writer, &item.as_char().to_string())?;
        }

        Ok(())
    }

    fn print_values(id: WorkerId, store: &OrderedListStore) -> Result<Vec<char>, WorkerError> {
        let mut emitted = Vec::with_capacity(store.len());
        for item in store.iter()? {
            info!(worker_id = %id, "{}", item.as_char());
            emitted.push(item.as_char());
        }
        Ok(emitted)
    }
}

/// Owned handle to a spawned worker.
///
/// Join it with [`WorkerHandle::join`]. Dropping it unjoined raises the
/// worker's cancel signal, so the detached run stops at its next step
/// boundary instead of running on unobserved.
#[must_use = "a spawned worker must be joined"]
#[derive(Debug)]
pub struct WorkerHandle {
    id: WorkerId,
    cancel: CancelSignal,
    join: JoinHandle<Result<CompletionStatus, WorkerError>>,
}

impl WorkerHandle {
    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// Request cooperative cancellation without waiting
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait at most `limit` for the run to finish.
    ///
    /// On timeout the worker is cancelled and awaited until it stops (at most
    /// one step interval), then [`WorkerError::TimedOut`] is returned.
    pub async fn join(mut self, limit: Duration) -> Result<CompletionStatus, WorkerError> {
        let outcome = tokio::time::timeout(limit, &mut self.join).await;
        match outcome {
            Ok(joined) => self.settle(joined),
            Err(_) => {
                warn!(
                    worker_id = %self.id,
                    limit_ms = limit.as_millis(),
                    "[kw-03] Worker join timed out, cancelling"
                );
                self.cancel.cancel();

                let joined = (&mut self.join).await;
                if let Err(err) = self.settle(joined) {
                    debug!(worker_id = %self.id, error = %err, "[kw-03] Cancelled worker reaped");
                }

                Err(WorkerError::TimedOut {
                    worker_id: self.id,
                    limit_ms: limit.as_millis(),
                })
            }
        }
    }

    fn settle(
        &self,
        joined: Result<Result<CompletionStatus, WorkerError>, JoinError>,
    ) -> Result<CompletionStatus, WorkerError> {
        match joined {
            Ok(outcome) => outcome,
            Err(join_err) => Err(WorkerError::Panicked {
                worker_id: self.id,
                reason: join_err.to_string(),
            }),
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        if !self.join.is_finished() {
            self.cancel.cancel();
        }
    }
}
