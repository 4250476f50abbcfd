//! Structural invariants for the Ordered List Store
//!
//! Checked after every mutation in debug builds, and by tests.

use super::entities::OrderedListStore;

/// INVARIANT-1: Head Boundary
/// The head has no predecessor. An empty store has neither head nor tail.
pub fn invariant_head_has_no_predecessor(store: &OrderedListStore) -> bool {
    match store.head() {
        Some(head) => store.get(head).is_some() && store.prev_of(head).is_none(),
        None => store.tail().is_none(),
    }
}

/// INVARIANT-2: Tail Boundary
/// The tail has no successor. An empty store has neither head nor tail.
pub fn invariant_tail_has_no_successor(store: &OrderedListStore) -> bool {
    match store.tail() {
        Some(tail) => store.get(tail).is_some() && store.next_of(tail).is_none(),
        None => store.head().is_none(),
    }
}

/// INVARIANT-3: Link Symmetry
/// For every non-tail item, its successor's predecessor is the item itself.
pub fn invariant_links_symmetric(store: &OrderedListStore) -> bool {
    let mut cursor = store.head();
    let mut steps = 0;

    while let Some(id) = cursor {
        steps += 1;
        if steps > store.len() {
            // Walked further than the store holds - the cycle check reports it
            return true;
        }

        let next = store.next_of(id);
        if let Some(succ) = next {
            if store.prev_of(succ) != Some(id) {
                return false;
            }
        }
        cursor = next;
    }

    true
}

/// INVARIANT-4: Acyclic
/// Walking from the head reaches the tail after exactly `len` items.
pub fn invariant_acyclic(store: &OrderedListStore) -> bool {
    let mut cursor = store.head();
    let mut last = None;
    let mut visited = 0;

    while let Some(id) = cursor {
        visited += 1;
        if visited > store.len() {
            return false;
        }
        last = Some(id);
        cursor = store.next_of(id);
    }

    visited == store.len() && last == store.tail()
}

/// All structural invariants at once
pub fn check_invariants(store: &OrderedListStore) -> bool {
    invariant_head_has_no_predecessor(store)
        && invariant_tail_has_no_successor(store)
        && invariant_links_symmetric(store)
        && invariant_acyclic(store)
}
