//! Configuration for the Command Dispatcher

use crate::domain::errors::RegistryError;
use kw_03_list_worker::WorkerConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Dispatcher configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Upper bound on waiting for a spawned worker (milliseconds)
    pub join_timeout_ms: u64,
    /// Settings for workers spawned by the list command
    pub worker: WorkerConfig,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            join_timeout_ms: 30_000,
            worker: WorkerConfig::default(),
        }
    }
}

impl DispatcherConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.join_timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(
                "join_timeout_ms cannot be 0".into(),
            ));
        }

        self.worker.validate()?;
        Ok(())
    }

    pub fn join_timeout(&self) -> Duration {
        Duration::from_millis(self.join_timeout_ms)
    }
}

/// Dispatcher setup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Invalid worker config: {0}")]
    Worker(#[from] kw_03_list_worker::ConfigError),

    #[error("Invalid registry: {0}")]
    Registry(#[from] RegistryError),
}
