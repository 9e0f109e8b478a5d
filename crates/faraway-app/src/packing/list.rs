//! Ordered packing list with add / remove / toggle / clear

use faraway_core::prelude::*;
use faraway_core::{Item, ItemId};

use super::stats::PackingStats;

/// The packing list owned by one host
///
/// Items keep insertion order. Ids come from a per-list counter that only
/// moves forward, so an id is never reused for the lifetime of the list,
/// including across [`PackingList::clear_confirmed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingList {
    items: Vec<Item>,
    next_id: u64,
}

impl Default for PackingList {
    fn default() -> Self {
        Self::new()
    }
}

impl PackingList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a list from seed entries `(description, quantity, packed)`
    ///
    /// Every entry goes through the same validation as [`PackingList::add`].
    pub fn with_items<'a, I>(seed: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, u32, bool)>,
    {
        let mut list = Self::new();
        for (description, quantity, packed) in seed {
            let id = list.add(description, quantity)?;
            if packed {
                list.toggle(id)?;
            }
        }
        Ok(list)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Derived statistics, recomputed from the current items on every call
    pub fn stats(&self) -> PackingStats {
        PackingStats::from_items(&self.items)
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a new unpacked item and return its id
    ///
    /// The id counter only advances once validation has passed.
    pub fn add(&mut self, description: &str, quantity: u32) -> Result<ItemId> {
        // Validate before allocating so rejected input leaves no trace
        let probe = Item::new(ItemId::new(self.next_id), description, quantity)?;
        let id = self.allocate_id();
        debug!("Added item {} ({} x {})", id, probe.quantity, probe.description);
        self.items.push(Item { id, ..probe });
        Ok(id)
    }

    /// Remove an item by id, returning it
    ///
    /// Survivors keep their relative order.
    pub fn remove(&mut self, id: ItemId) -> Result<Item> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        debug!("Removed item {} ({})", id, removed.description);
        Ok(removed)
    }

    /// Flip `packed` on an item and return the new value
    ///
    /// The stored item is replaced by a fresh value rather than mutated in
    /// place, so a snapshot taken before the call compares unequal after it.
    pub fn toggle(&mut self, id: ItemId) -> Result<bool> {
        let index = self.position(id)?;
        let toggled = self.items[index].toggled();
        let packed = toggled.packed;
        self.items[index] = toggled;
        debug!("Item {} packed={}", id, packed);
        Ok(packed)
    }

    /// Check that a clear is possible
    ///
    /// Returns the number of items that a confirmed clear would drop, or
    /// [`Error::NothingToClear`] when the list is already empty.
    pub fn request_clear(&self) -> Result<usize> {
        if self.items.is_empty() {
            return Err(Error::NothingToClear);
        }
        Ok(self.items.len())
    }

    /// Empty the list after the host has obtained confirmation
    ///
    /// Returns the number of items dropped.
    pub fn clear_confirmed(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        info!("Cleared {} items from the packing list", count);
        count
    }

    /// Run the full clear protocol against a confirmation source
    ///
    /// `confirm` is only called when the list is non-empty; the list is
    /// emptied only if it answers `true`. Returns the number of items dropped
    /// (zero when declined).
    pub fn clear_with<F>(&mut self, confirm: F) -> Result<usize>
    where
        F: FnOnce(usize) -> bool,
    {
        let count = self.request_clear()?;
        if confirm(count) {
            Ok(self.clear_confirmed())
        } else {
            debug!("Clear declined; keeping {} items", count);
            Ok(0)
        }
    }

    fn position(&self, id: ItemId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| Error::item_not_found(id))
    }
}
