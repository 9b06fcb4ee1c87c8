//! Transactions

use tracing::trace;

use crate::{
    basket::Basket,
    items::Item,
    rules::RuleSet,
    validation::{ValidationError, validate_item, validate_rule_set},
};

/// A basket bound to an active set of pricing rules
#[derive(Debug, Clone)]
pub struct Transaction<'a> {
    rules: &'a RuleSet,
    basket: Basket,
}

impl<'a> Transaction<'a> {
    /// Start a transaction priced by `rules`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyRuleSet`] if `rules` is empty.
    pub fn new(rules: &'a RuleSet) -> Result<Self, ValidationError> {
        validate_rule_set(rules)?;

        Ok(Self {
            rules,
            basket: Basket::new(),
        })
    }

    /// Add one of `item` to the basket.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnpricedItem`] if no rule prices `item`. The
    /// basket is left unchanged.
    pub fn scan(&mut self, item: &Item) -> Result<&mut Self, ValidationError> {
        validate_item(item, self.rules)?;

        let quantity = self.basket.add(item);

        trace!(item = %item, quantity, "scanned item");

        Ok(self)
    }

    /// Scan each item in turn, stopping at the first unpriced item.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnpricedItem`] for the first unpriced item.
    /// Items scanned before it stay in the basket.
    pub fn scan_all<'i>(
        &mut self,
        items: impl IntoIterator<Item = &'i Item>,
    ) -> Result<&mut Self, ValidationError> {
        for item in items {
            self.scan(item)?;
        }

        Ok(self)
    }

    /// The rules pricing this transaction.
    pub fn rules(&self) -> &'a RuleSet {
        self.rules
    }

    /// The scanned items.
    pub fn basket(&self) -> &Basket {
        &self.basket
    }
}
