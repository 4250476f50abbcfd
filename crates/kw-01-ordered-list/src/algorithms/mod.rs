//! Algorithms module for the Ordered List Store
//!
//! Contains:
//! - Descending adjacent-swap sort

pub mod sorter;

pub use sorter::{sort_descending, SortStats};
