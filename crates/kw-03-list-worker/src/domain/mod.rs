//! Domain module for the List Worker

pub mod cancel;
pub mod entities;
pub mod errors;

pub use cancel::CancelSignal;
pub use entities::*;
pub use errors::*;
