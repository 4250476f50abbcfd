//! Keyword handlers

pub mod basic;
pub mod list_worker;

pub use basic::{EchoHandler, FixedIntegerHandler, TupleEchoHandler};
pub use list_worker::ListWorkerHandler;
