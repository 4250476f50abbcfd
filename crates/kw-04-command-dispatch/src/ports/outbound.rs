//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::DispatchError;
use crate::domain::result::KeywordResult;
use async_trait::async_trait;

/// Executes one registered command.
///
/// Receives arguments already validated and decomposed against the
/// command's parameter list.
#[async_trait]
pub trait KeywordHandler: Send + Sync {
    async fn execute(&self, command: &str, args: &[String])
        -> Result<KeywordResult, DispatchError>;
}
