//! Descending Adjacent-Swap Sort
//!
//! Repeated left-to-right passes over the chain. Whenever an item's value is
//! smaller than its successor's, the item is repositioned past the successor.
//! Passes repeat until one completes without a swap.
//!
//! O(n²) worst case. Equal values never swap, so their relative order holds.

use crate::domain::entities::OrderedListStore;
use crate::domain::errors::StoreError;
use tracing::debug;

/// Work done by one sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Full passes over the chain, including the final swap-free pass
    pub passes: usize,
    /// Adjacent repositionings performed
    pub swaps: usize,
}

/// Sort `store` in place, largest value first.
///
/// No-op on an empty or single-item store.
pub fn sort_descending(store: &mut OrderedListStore) -> Result<SortStats, StoreError> {
    if store.is_destroyed() {
        return Err(StoreError::Destroyed);
    }

    let mut stats = SortStats::default();
    if store.len() < 2 {
        return Ok(stats);
    }

    loop {
        stats.passes += 1;
        let mut swapped = false;
        let mut cursor = store.head();

        while let Some(current) = cursor {
            let Some(next) = store.next_of(current) else {
                break;
            };

            if store.value_of(current)? < store.value_of(next)? {
                store.swap_with_next(current)?;
                stats.swaps += 1;
                swapped = true;
                // `current` moved one step right; compare it with its new successor
                cursor = Some(current);
            } else {
                cursor = Some(next);
            }
        }

        if !swapped {
            break;
        }
    }

    debug!(
        passes = stats.passes,
        swaps = stats.swaps,
        len = store.len(),
        "[kw-01] Sorted store descending"
    );

    Ok(stats)
}
