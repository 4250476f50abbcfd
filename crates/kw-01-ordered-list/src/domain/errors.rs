//! Error types for the Ordered List Store

use super::entities::ItemId;
use thiserror::Error;

/// All errors that can occur while mutating or reading a store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Store was already destroyed; no further reads or writes are allowed
    #[error("Store has been destroyed")]
    Destroyed,

    /// Capacity guard tripped while appending
    #[error("Store capacity exceeded: max {max} items")]
    CapacityExceeded { max: usize },

    /// A link points at a slot that holds no item
    #[error("Dangling item reference: {0}")]
    DanglingItem(ItemId),

    /// Swap requested on an item that has no successor
    #[error("Item {0} has no successor to swap with")]
    NoSuccessor(ItemId),

    /// Destroy walked a different number of items than the store recorded
    #[error("Destroy released {released} items, expected {expected}")]
    LengthMismatch { expected: usize, released: usize },
}
