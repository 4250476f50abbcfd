//! Application layer for the Command Dispatcher

pub mod service;

pub use service::CommandDispatcher;
