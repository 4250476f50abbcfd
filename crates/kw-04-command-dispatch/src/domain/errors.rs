//! Dispatcher error taxonomy and transport faults.
//!
//! Fault codes follow JSON-RPC 2.0 conventions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fault codes surfaced to the transport layer
pub mod codes {
    // JSON-RPC 2.0 standard errors
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    // Server errors
    pub const EXECUTION_ERROR: i32 = -32015;
}

/// Why an invocation did not produce a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Name is not in the registry
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    /// Wrong arity, wrong type, or empty where content is required
    #[error("Malformed arguments for {command}: {reason}")]
    MalformedArguments { command: String, reason: String },

    /// Valid invocation that failed while running
    #[error("Handler execution failed for {command}: {reason}")]
    HandlerExecutionFailure { command: String, reason: String },
}

impl DispatchError {
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    pub fn malformed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedArguments {
            command: command.into(),
            reason: reason.into(),
        }
    }

    pub fn execution_failure(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::HandlerExecutionFailure {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Transport fault code for this error
    pub const fn code(&self) -> i32 {
        match self {
            DispatchError::UnknownCommand { .. } => codes::METHOD_NOT_FOUND,
            DispatchError::MalformedArguments { .. } => codes::INVALID_PARAMS,
            DispatchError::HandlerExecutionFailure { .. } => codes::EXECUTION_ERROR,
        }
    }
}

/// Transport-level fault, returned instead of a partially filled result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Fault {code}: {message}")]
pub struct Fault {
    pub code: i32,
    pub message: String,
}

impl Fault {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// RPC method not found
    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", method),
        )
    }

    /// Invalid parameters
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::new(
            codes::INVALID_PARAMS,
            format!("Invalid params: {}", details.into()),
        )
    }

    /// Internal error
    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(
            codes::INTERNAL_ERROR,
            format!("Internal error: {}", details.into()),
        )
    }
}

impl From<DispatchError> for Fault {
    fn from(err: DispatchError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// Registry construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate command name: {0}")]
    DuplicateCommand(&'static str),
}
