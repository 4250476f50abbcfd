//! Core entities for the Ordered List Store

use super::errors::StoreError;
use super::invariants::check_invariants;
use crate::config::StoreConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to an item inside one store's arena.
///
/// Ids are never reused within a store, so a stale id can only resolve to
/// `None`, never to a different item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    /// Arena slot index
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One generated value (a single byte code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListItem {
    pub value: u8,
}

impl ListItem {
    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    /// Value rendered as a character
    pub fn as_char(&self) -> char {
        char::from(self.value)
    }
}

impl From<u8> for ListItem {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone)]
struct Link {
    item: ListItem,
    prev: Option<ItemId>,
    next: Option<ItemId>,
}

/// Ordered, mutable sequence of [`ListItem`]s with head and tail references.
///
/// Single owner, single writer. The store is not `Sync`-shared by any caller in
/// this workspace; the owning worker mutates it directly.
#[derive(Debug)]
pub struct OrderedListStore {
    slots: Vec<Option<Link>>,
    head: Option<ItemId>,
    tail: Option<ItemId>,
    len: usize,
    max_items: usize,
    destroyed: bool,
}

impl OrderedListStore {
    /// Create an empty store with default limits
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Create an empty store with custom limits
    pub fn with_config(config: &StoreConfig) -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            max_items: config.max_items,
            destroyed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn head(&self) -> Option<ItemId> {
        self.head
    }

    pub fn tail(&self) -> Option<ItemId> {
        self.tail
    }

    /// Item stored under `id`, if it is still held
    pub fn get(&self, id: ItemId) -> Option<ListItem> {
        self.slot(id).map(|link| link.item)
    }

    /// Successor of `id` in sequence order
    pub fn next_of(&self, id: ItemId) -> Option<ItemId> {
        self.slot(id).and_then(|link| link.next)
    }

    /// Predecessor of `id` in sequence order
    pub fn prev_of(&self, id: ItemId) -> Option<ItemId> {
        self.slot(id).and_then(|link| link.prev)
    }

    /// Value of the item under `id`
    pub fn value_of(&self, id: ItemId) -> Result<u8, StoreError> {
        self.link(id).map(|link| link.item.value)
    }

    /// Link `item` after the current tail in O(1).
    pub fn append(&mut self, item: ListItem) -> Result<ItemId, StoreError> {
        self.ensure_live()?;

        if self.len >= self.max_items {
            return Err(StoreError::CapacityExceeded {
                max: self.max_items,
            });
        }

        let id = ItemId(self.slots.len());
        let prev = self.tail;

        match prev {
            // Non-empty: old tail gains a successor
            Some(old_tail) => {
                self.link_mut(old_tail)?.next = Some(id);
            }
            // Empty: the new item is also the head
            None => {
                self.head = Some(id);
            }
        }

        self.slots.push(Some(Link {
            item,
            prev,
            next: None,
        }));
        self.tail = Some(id);
        self.len += 1;

        debug_assert!(check_invariants(self), "append broke list invariants");
        Ok(id)
    }

    /// Move `first` one position towards the tail, past its successor.
    ///
    /// `[before] <-> first <-> second <-> [after]` becomes
    /// `[before] <-> second <-> first <-> [after]`. Returns the id of `second`.
    pub fn swap_with_next(&mut self, first: ItemId) -> Result<ItemId, StoreError> {
        self.ensure_live()?;

        let (before, second) = {
            let link = self.link(first)?;
            (link.prev, link.next.ok_or(StoreError::NoSuccessor(first))?)
        };
        let after = self.link(second)?.next;

        match before {
            Some(pred) => {
                self.link_mut(pred)?.next = Some(second);
            }
            None => {
                // `first` was the head
                self.head = Some(second);
            }
        }

        match after {
            Some(succ) => {
                self.link_mut(succ)?.prev = Some(first);
            }
            None => {
                // `second` was the tail
                self.tail = Some(first);
            }
        }

        {
            let link = self.link_mut(second)?;
            link.prev = before;
            link.next = Some(first);
        }
        {
            let link = self.link_mut(first)?;
            link.prev = Some(second);
            link.next = after;
        }

        debug_assert!(check_invariants(self), "swap broke list invariants");
        Ok(second)
    }

    /// Item ids from head to tail.
    pub fn positions(&self) -> Result<Positions<'_>, StoreError> {
        self.ensure_live()?;
        Ok(Positions {
            store: self,
            cursor: self.head,
            remaining: self.len,
        })
    }

    /// Lazy head-to-tail traversal. Does not mutate; may be called repeatedly.
    pub fn iter(&self) -> Result<Iter<'_>, StoreError> {
        Ok(Iter {
            positions: self.positions()?,
        })
    }

    /// Collect the values in sequence order
    pub fn values(&self) -> Result<Vec<u8>, StoreError> {
        Ok(self.iter()?.map(|item| item.value).collect())
    }

    /// Release every item exactly once, walking head to tail.
    ///
    /// Returns the number of items released. The store is unusable afterwards.
    pub fn destroy(&mut self) -> Result<usize, StoreError> {
        self.ensure_live()?;

        let expected = self.len;
        let mut cursor = self.head.take();
        let mut released = 0;

        self.tail = None;
        self.len = 0;
        self.destroyed = true;

        while let Some(id) = cursor {
            // `take` empties the slot, so a corrupted cycle ends here
            let Some(link) = self.slots.get_mut(id.0).and_then(Option::take) else {
                self.slots.clear();
                return Err(StoreError::DanglingItem(id));
            };
            cursor = link.next;
            released += 1;
        }

        self.slots.clear();

        if released != expected {
            return Err(StoreError::LengthMismatch { expected, released });
        }
        Ok(released)
    }

    fn ensure_live(&self) -> Result<(), StoreError> {
        if self.destroyed {
            return Err(StoreError::Destroyed);
        }
        Ok(())
    }

    fn slot(&self, id: ItemId) -> Option<&Link> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn link(&self, id: ItemId) -> Result<&Link, StoreError> {
        self.slot(id).ok_or(StoreError::DanglingItem(id))
    }

    fn link_mut(&mut self, id: ItemId) -> Result<&mut Link, StoreError> {
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(StoreError::DanglingItem(id))
    }

    #[cfg(test)]
    pub(crate) fn set_prev_unchecked(&mut self, id: ItemId, prev: Option<ItemId>) {
        if let Some(link) = self.slots.get_mut(id.0).and_then(Option::as_mut) {
            link.prev = prev;
        }
    }

    #[cfg(test)]
    pub(crate) fn set_next_unchecked(&mut self, id: ItemId, next: Option<ItemId>) {
        if let Some(link) = self.slots.get_mut(id.0).and_then(Option::as_mut) {
            link.next = next;
        }
    }
}

impl Default for OrderedListStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Head-to-tail iterator over item ids
#[derive(Debug, Clone)]
pub struct Positions<'a> {
    store: &'a OrderedListStore,
    cursor: Option<ItemId>,
    remaining: usize,
}

impl Iterator for Positions<'_> {
    type Item = ItemId;

    fn next(&mut self) -> Option<Self::Item> {
        // Bounded by len even if links were corrupted into a cycle
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        self.remaining -= 1;
        self.cursor = self.store.next_of(id);
        Some(id)
    }
}

/// Head-to-tail iterator over items
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    positions: Positions<'a>,
}

impl Iterator for Iter<'_> {
    type Item = ListItem;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.positions.next()?;
        self.positions.store.get(id)
    }
}
