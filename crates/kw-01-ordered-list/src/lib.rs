//! # KW-01: Ordered List Store
//!
//! Owned doubly linked sequence of generated items, plus the in-place
//! descending sort that the list worker runs over it.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (ListItem, ItemId, OrderedListStore), errors, invariants
//! - **Algorithms**: Adjacent-swap descending sort (the Sorter)
//! - **Config**: Store capacity limits
//!
//! ## Ownership Model
//!
//! Items live in an arena owned by the store and are linked through stable
//! [`ItemId`] indices. A sort swap repositions an item within the chain by
//! re-linking indices; no item is ever aliased or freed twice.
//!
//! ```text
//!  head                                   tail
//!   │                                      │
//!   ▼                                      ▼
//! ┌───┐ next ┌───┐ next ┌───┐ next ┌───┐
//! │ A │─────▶│ B │─────▶│ C │─────▶│ D │──▶ None
//! │   │◀─────│   │◀─────│   │◀─────│   │
//! └───┘ prev └───┘ prev └───┘ prev └───┘
//!   │
//!   ▼
//!  None
//! ```

pub mod algorithms;
pub mod config;
pub mod domain;

pub use algorithms::{sort_descending, SortStats};
pub use config::StoreConfig;
pub use domain::entities::{ItemId, Iter, ListItem, OrderedListStore, Positions};
pub use domain::errors::StoreError;
pub use domain::invariants::check_invariants;
