//! Configuration for the Ordered List Store

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum items a single store may hold (resource guard)
    pub max_items: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { max_items: 1024 }
    }
}

impl StoreConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_items == 0 {
            return Err(ConfigError::InvalidLimit("max_items cannot be 0".into()));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
}
