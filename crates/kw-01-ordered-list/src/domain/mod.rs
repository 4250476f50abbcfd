//! Domain module for the Ordered List Store
//!
//! Contains core entities, errors, and structural invariants.

pub mod entities;
pub mod errors;
pub mod invariants;

pub use entities::*;
pub use errors::*;
