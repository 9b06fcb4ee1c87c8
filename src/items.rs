//! Items

use std::fmt;

/// A purchasable product, identified by its SKU
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    sku: String,
}

impl Item {
    /// Creates a new item with the given SKU
    pub fn new(sku: impl Into<String>) -> Self {
        Self { sku: sku.into() }
    }

    /// Returns the SKU of the item
    pub fn sku(&self) -> &str {
        &self.sku
    }
}

impl From<&str> for Item {
    fn from(sku: &str) -> Self {
        Self::new(sku)
    }
}

impl From<String> for Item {
    fn from(sku: String) -> Self {
        Self::new(sku)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sku)
    }
}
