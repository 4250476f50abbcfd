//! Domain module for the Command Dispatcher
//!
//! Contains result shapes, the command registry, and the error taxonomy.

pub mod errors;
pub mod registry;
pub mod result;

pub use errors::*;
pub use registry::*;
pub use result::*;
