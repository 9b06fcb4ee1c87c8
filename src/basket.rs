//! Basket

use rustc_hash::FxHashMap;

use crate::items::Item;

/// Quantities of each scanned item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    quantities: FxHashMap<Item, u64>,
}

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `item` to the basket, returning its new quantity.
    pub fn add(&mut self, item: &Item) -> u64 {
        if let Some(quantity) = self.quantities.get_mut(item) {
            *quantity = quantity.saturating_add(1);

            return *quantity;
        }

        self.quantities.insert(item.clone(), 1);

        1
    }

    /// Get the quantity of `item`, if it has been scanned.
    pub fn quantity(&self, item: &Item) -> Option<u64> {
        self.quantities.get(item).copied()
    }

    /// Overwrite the quantity of an item already in the basket.
    pub(crate) fn set_quantity(&mut self, item: &Item, quantity: u64) {
        if let Some(current) = self.quantities.get_mut(item) {
            *current = quantity;
        }
    }

    /// Iterate over items and their quantities.
    pub fn iter(&self) -> impl Iterator<Item = (&Item, u64)> {
        self.quantities
            .iter()
            .map(|(item, quantity)| (item, *quantity))
    }

    /// Get the number of distinct items in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Get the number of units across all items.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.quantities
            .values()
            .fold(0, |total, quantity| total.saturating_add(*quantity))
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}
