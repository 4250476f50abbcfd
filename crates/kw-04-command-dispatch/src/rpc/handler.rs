//! Routes the two keyword RPC methods onto [`KeywordApi`].

use crate::domain::errors::Fault;
use crate::ports::inbound::KeywordApi;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Lists registered keyword names
pub const GET_KEYWORD_NAMES: &str = "get_keyword_names";
/// Runs one keyword: params `[name, [arg, ...]]`
pub const RUN_KEYWORD: &str = "run_keyword";

/// Keyword RPC handler
#[derive(Clone)]
pub struct KeywordRpcHandler {
    api: Arc<dyn KeywordApi>,
}

impl KeywordRpcHandler {
    pub fn new(api: Arc<dyn KeywordApi>) -> Self {
        Self { api }
    }

    /// Route one decoded call
    pub async fn handle(&self, method: &str, params: Option<&Value>) -> Result<Value, Fault> {
        debug!(method, "[kw-04] RPC call");

        match method {
            GET_KEYWORD_NAMES => Ok(Value::from(self.api.list_commands())),
            RUN_KEYWORD => self.run_keyword(params).await,
            _ => Err(Fault::method_not_found(method)),
        }
    }

    async fn run_keyword(&self, params: Option<&Value>) -> Result<Value, Fault> {
        let (name, args) = split_run_params(params)?;
        let result = self.api.invoke(name, args).await?;
        serde_json::to_value(&result).map_err(|e| Fault::internal(e.to_string()))
    }
}

impl std::fmt::Debug for KeywordRpcHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordRpcHandler").finish_non_exhaustive()
    }
}

/// Split `[name, [args...]]`; a missing args element means no arguments.
fn split_run_params(params: Option<&Value>) -> Result<(&str, &[Value]), Fault> {
    let params = params
        .and_then(Value::as_array)
        .ok_or_else(|| Fault::invalid_params("expected [name, [args]]"))?;

    let name = params
        .first()
        .and_then(Value::as_str)
        .ok_or_else(|| Fault::invalid_params("keyword name must be a string at index 0"))?;

    let args = match params.get(1) {
        None => &[][..],
        Some(Value::Array(args)) => args.as_slice(),
        Some(_) => {
            return Err(Fault::invalid_params(
                "keyword arguments must be an array at index 1",
            ))
        }
    };

    if params.len() > 2 {
        return Err(Fault::invalid_params(format!(
            "expected at most 2 params, got {}",
            params.len()
        )));
    }

    Ok((name, args))
}
