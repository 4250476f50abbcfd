//! Ports for the Command Dispatcher

pub mod inbound;
pub mod outbound;

pub use inbound::KeywordApi;
pub use outbound::KeywordHandler;
