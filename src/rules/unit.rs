//! Unit Rule
//!
//! A flat price charged for every unit of an item.

use std::fmt;

use rust_decimal::Decimal;

use crate::{
    items::Item,
    pricing::to_minor_units,
    rules::{PricingRule, RuleApplication, RuleError, checked_price},
};

/// A flat per-item price
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitRule {
    item: Item,
    price: i64,
}

impl UnitRule {
    /// Unit rules are the fallback for an item, so they're applied last.
    pub const PRIORITY: u8 = 0;

    /// Return the item
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Return the unit price in minor units
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Price the whole quantity at the unit price.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Overflow`] if the price doesn't fit in minor units.
    pub fn apply(&self, quantity: u64) -> Result<RuleApplication, RuleError> {
        let price = checked_price(&self.item, quantity, self.price, quantity)?;

        Ok(RuleApplication { price, quantity })
    }
}

impl fmt::Display for UnitRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item {} at {}p each", self.item, self.price)
    }
}

/// Builder for a [`UnitRule`]
#[derive(Debug, Clone)]
#[must_use]
pub struct UnitRuleBuilder {
    item: Item,
}

impl UnitRuleBuilder {
    /// Create a builder for the given item.
    pub fn new(item: impl Into<Item>) -> Self {
        Self { item: item.into() }
    }

    /// Finish the rule with a decimal unit price (e.g. `0.50`).
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Price`] if the price is negative or out of range.
    pub fn at_price(self, price: Decimal) -> Result<PricingRule, RuleError> {
        let price = to_minor_units(price)?;

        Ok(PricingRule::Unit(UnitRule {
            item: self.item,
            price,
        }))
    }
}

/// Start building a unit rule for `item`.
pub fn unit_rule_for(item: impl Into<Item>) -> UnitRuleBuilder {
    UnitRuleBuilder::new(item)
}
