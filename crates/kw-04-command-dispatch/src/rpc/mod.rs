//! RPC method adapter
//!
//! Decoded JSON-RPC calls in, JSON values or faults out. Wire framing stays
//! with the transport.

pub mod handler;

pub use handler::{KeywordRpcHandler, GET_KEYWORD_NAMES, RUN_KEYWORD};
