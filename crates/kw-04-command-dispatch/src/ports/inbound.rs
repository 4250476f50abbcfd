//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::DispatchError;
use crate::domain::result::KeywordResult;
use async_trait::async_trait;
use serde_json::Value;

/// Primary keyword API consumed by the RPC transport layer
#[async_trait]
pub trait KeywordApi: Send + Sync {
    /// Registered command names, in fixed registration order.
    fn list_commands(&self) -> Vec<String>;

    /// Route one decoded invocation to its handler.
    ///
    /// Name and argument validation happen before the handler runs. Every
    /// `Ok` carries a fully populated result.
    async fn invoke(&self, name: &str, args: &[Value]) -> Result<KeywordResult, DispatchError>;
}
