//! # KW-04: Command Dispatcher
//!
//! Routes named keyword invocations to registered handlers and returns a
//! structured `{status, output, return}` result to the transport layer.
//!
//! ## Architecture
//!
//! - **Domain**: result shapes, command registry, error taxonomy and faults
//! - **Ports**: Inbound [`KeywordApi`], outbound [`KeywordHandler`]
//! - **Handlers**: one per registered command
//! - **Application**: [`CommandDispatcher`] owning the registry and ledger
//! - **RPC**: [`KeywordRpcHandler`] mapping `get_keyword_names` / `run_keyword`
//!
//! ## Registered Commands
//!
//! | Name        | Params            | Result                                   |
//! |-------------|-------------------|------------------------------------------|
//! | `keyword 1` | none              | `2`, PASS when positive                  |
//! | `keyword 2` | one non-empty str | the argument, PASS when first char > 'A' |
//! | `keyword 3` | two str           | runs one list worker, `("one","two","three")` |
//! | `keyword 4` | three str         | the three arguments, always PASS         |
//!
//! Unknown names and malformed arguments are rejected before any handler
//! runs. A failed worker run surfaces as
//! [`DispatchError::HandlerExecutionFailure`] and leaves the shared ledger
//! usable by later invocations.

pub mod application;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod ports;
pub mod rpc;

pub use application::CommandDispatcher;
pub use config::{ConfigError, DispatcherConfig};
pub use domain::errors::{codes, DispatchError, Fault, RegistryError};
pub use domain::registry::{CommandRegistry, CommandSpec, ParamSpec, RegisteredCommand};
pub use domain::result::{KeywordResult, ReturnValue, Status};
pub use ports::{KeywordApi, KeywordHandler};
pub use rpc::KeywordRpcHandler;
