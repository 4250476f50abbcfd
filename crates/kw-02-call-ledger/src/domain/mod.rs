//! Domain module for the Shared Call Ledger

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
