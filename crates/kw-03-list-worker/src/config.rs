//! Configuration for the List Worker

use kw_01_ordered_list::StoreConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Worker configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Production steps per run
    pub steps: usize,
    /// Simulated streaming delay before each step (milliseconds)
    pub step_interval_ms: u64,
    /// Value produced by the first step; each later step adds one
    pub first_value: u8,
    /// Limits for the worker's private store
    pub store: StoreConfig,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            steps: 20,
            step_interval_ms: 100,
            first_value: b'A',
            store: StoreConfig::default(),
        }
    }
}

impl WorkerConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::InvalidSteps("steps cannot be 0".into()));
        }

        if self.value_for_step(self.steps - 1).is_none() {
            return Err(ConfigError::InvalidSteps(format!(
                "{} steps from {} overflow a single byte",
                self.steps, self.first_value
            )));
        }

        self.store.validate()?;
        Ok(())
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Deterministic value for a zero-based step
    pub fn value_for_step(&self, step: usize) -> Option<u8> {
        u8::try_from(step)
            .ok()
            .and_then(|offset| self.first_value.checked_add(offset))
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid steps: {0}")]
    InvalidSteps(String),

    #[error("Invalid store config: {0}")]
    Store(#[from] kw_01_ordered_list::config::ConfigError),
}
