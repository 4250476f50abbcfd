//! Command Dispatcher Service
//!
//! Main service implementing KeywordApi.

use crate::config::{ConfigError, DispatcherConfig};
use crate::domain::errors::DispatchError;
use crate::domain::registry::{CommandRegistry, CommandSpec, ParamSpec};
use crate::domain::result::KeywordResult;
use crate::handlers::{EchoHandler, FixedIntegerHandler, ListWorkerHandler, TupleEchoHandler};
use crate::ports::inbound::KeywordApi;
use async_trait::async_trait;
use kw_02_call_ledger::SharedCallLedger;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

const NO_PARAMS: &[ParamSpec] = &[];
const ECHO_PARAMS: &[ParamSpec] = &[ParamSpec::non_empty_text("text")];
const LIST_PARAMS: &[ParamSpec] = &[ParamSpec::text("first"), ParamSpec::text("second")];
const TUPLE_PARAMS: &[ParamSpec] = &[
    ParamSpec::text("first"),
    ParamSpec::text("second"),
    ParamSpec::text("third"),
];

/// Command Dispatcher
///
/// Owns the registry and the shared ledger for its whole lifetime. Each
/// invocation:
/// 1. Look up the command name
/// 2. Validate and decompose arguments
/// 3. Run the handler
/// 4. Return a fully populated result or an error
pub struct CommandDispatcher {
    registry: CommandRegistry,
    ledger: Arc<SharedCallLedger>,
    config: DispatcherConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher with a fresh tracing-backed ledger
    pub fn new(config: DispatcherConfig) -> Result<Self, ConfigError> {
        Self::with_ledger(config, Arc::new(SharedCallLedger::new()))
    }

    /// Create a dispatcher sharing an existing ledger
    pub fn with_ledger(
        config: DispatcherConfig,
        ledger: Arc<SharedCallLedger>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let list_worker = ListWorkerHandler::new(
            config.worker.clone(),
            Arc::clone(&ledger),
            config.join_timeout(),
        );

        let registry = CommandRegistry::builder()
            .register(
                CommandSpec::new("keyword 1", NO_PARAMS, "Return a fixed positive integer"),
                Arc::new(FixedIntegerHandler::default()),
            )?
            .register(
                CommandSpec::new("keyword 2", ECHO_PARAMS, "Echo one non-empty string"),
                Arc::new(EchoHandler),
            )?
            .register(
                CommandSpec::new("keyword 3", LIST_PARAMS, "Run one list worker to completion"),
                Arc::new(list_worker),
            )?
            .register(
                CommandSpec::new("keyword 4", TUPLE_PARAMS, "Echo three strings as a tuple"),
                Arc::new(TupleEchoHandler),
            )?
            .build();

        info!(
            commands = registry.len(),
            join_timeout_ms = config.join_timeout_ms,
            "[kw-04] Dispatcher ready"
        );

        Ok(Self {
            registry,
            ledger,
            config,
        })
    }

    pub fn ledger(&self) -> &Arc<SharedCallLedger> {
        &self.ledger
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

impl std::fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDispatcher")
            .field("commands", &self.registry.names())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl KeywordApi for CommandDispatcher {
    fn list_commands(&self) -> Vec<String> {
        self.registry
            .names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    async fn invoke(&self, name: &str, args: &[Value]) -> Result<KeywordResult, DispatchError> {
        let command = self.registry.lookup(name).ok_or_else(|| {
            warn!(command = name, "[kw-04] Unknown command");
            DispatchError::unknown_command(name)
        })?;

        let decoded = command.spec.decompose(args).map_err(|err| {
            warn!(command = name, error = %err, "[kw-04] Rejected arguments");
            err
        })?;

        debug!(command = name, arity = decoded.len(), "[kw-04] Invoking handler");
        let result = command.handler.execute(command.spec.name, &decoded).await?;

        info!(
            command = name,
            status = result.status.as_str(),
            "[kw-04] Invocation complete"
        );
        Ok(result)
    }
}
