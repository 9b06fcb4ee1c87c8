//! Multi-Buy Rule
//!
//! Buy a fixed number of an item for a fixed price, e.g. "3 for £1.30". Only
//! whole bundles are priced; any remainder is left for the next rule for the
//! item, usually its [`UnitRule`](super::UnitRule).

use std::{fmt, num::NonZeroU32};

use rust_decimal::Decimal;

use crate::{
    items::Item,
    pricing::to_minor_units,
    rules::{PricingRule, RuleApplication, RuleError, checked_price},
};

/// Buy N for price P
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiBuyRule {
    item: Item,
    bundle_size: NonZeroU32,
    price: i64,
}

impl MultiBuyRule {
    /// Multi-buy rules are applied before unit rules.
    pub const PRIORITY: u8 = 1;

    /// Return the item
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Return the number of items in a bundle
    pub fn bundle_size(&self) -> u32 {
        self.bundle_size.get()
    }

    /// Return the bundle price in minor units
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Price as many whole bundles as fit in `quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Overflow`] if the price doesn't fit in minor units.
    pub fn apply(&self, quantity: u64) -> Result<RuleApplication, RuleError> {
        let bundle_size = u64::from(self.bundle_size.get());
        let bundles = quantity / bundle_size;

        let price = checked_price(&self.item, bundles, self.price, quantity)?;

        Ok(RuleApplication {
            price,
            quantity: bundles * bundle_size,
        })
    }
}

impl fmt::Display for MultiBuyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item {} at {}p for {}",
            self.item, self.price, self.bundle_size
        )
    }
}

/// Builder for a [`MultiBuyRule`]
#[derive(Debug, Clone)]
#[must_use]
pub struct MultiBuyRuleBuilder {
    item: Item,
    bundle_size: u32,
}

impl MultiBuyRuleBuilder {
    /// Create a builder for the given item.
    pub fn new(item: impl Into<Item>) -> Self {
        Self {
            item: item.into(),
            bundle_size: 0,
        }
    }

    /// Set the number of items in a bundle.
    pub fn buy(mut self, bundle_size: u32) -> Self {
        self.bundle_size = bundle_size;
        self
    }

    /// Finish the rule with a decimal bundle price (e.g. `1.30`).
    ///
    /// # Errors
    ///
    /// - [`RuleError::InvalidBundleSize`]: the bundle size is zero or was never set.
    /// - [`RuleError::Price`]: the price is negative or out of range.
    pub fn at_price(self, price: Decimal) -> Result<PricingRule, RuleError> {
        let bundle_size = NonZeroU32::new(self.bundle_size)
            .ok_or(RuleError::InvalidBundleSize(self.bundle_size))?;

        let price = to_minor_units(price)?;

        Ok(PricingRule::MultiBuy(MultiBuyRule {
            item: self.item,
            bundle_size,
            price,
        }))
    }
}

/// Start building a multi-buy rule for `item`.
pub fn multi_buy_rule_for(item: impl Into<Item>) -> MultiBuyRuleBuilder {
    MultiBuyRuleBuilder::new(item)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn rule(bundle_size: u32, price: Decimal) -> Result<MultiBuyRule, RuleError> {
        match multi_buy_rule_for("A").buy(bundle_size).at_price(price)? {
            PricingRule::MultiBuy(multi_buy) => Ok(multi_buy),
            PricingRule::Unit(_) => {
                unreachable!("multi-buy builder always returns a multi-buy rule")
            }
        }
    }

    #[test]
    fn builder_sets_bundle_and_price() -> TestResult {
        let multi_buy = rule(3, Decimal::new(130, 2))?;

        assert_eq!(multi_buy.item(), &Item::new("A"));
        assert_eq!(multi_buy.bundle_size(), 3);
        assert_eq!(multi_buy.price(), 130);

        Ok(())
    }

    #[test]
    fn apply_consumes_whole_bundles_only() -> TestResult {
        let multi_buy = rule(3, Decimal::new(130, 2))?;

        assert_eq!(
            multi_buy.apply(7)?,
            RuleApplication {
                price: 260,
                quantity: 6
            }
        );

        assert_eq!(
            multi_buy.apply(3)?,
            RuleApplication {
                price: 130,
                quantity: 3
            }
        );

        Ok(())
    }

    #[test]
    fn apply_below_bundle_size_consumes_nothing() -> TestResult {
        let multi_buy = rule(3, Decimal::new(130, 2))?;

        assert_eq!(multi_buy.apply(2)?, RuleApplication::default());
        assert_eq!(multi_buy.apply(0)?, RuleApplication::default());

        Ok(())
    }

    #[test]
    fn apply_matches_floor_division_for_any_quantity() -> TestResult {
        let multi_buy = rule(4, Decimal::new(99, 2))?;

        for quantity in 0..=40_u64 {
            let applied = multi_buy.apply(quantity)?;
            let bundles = quantity / 4;

            assert_eq!(applied.quantity, bundles * 4, "quantity for {quantity}");
            assert_eq!(
                applied.price,
                i64::try_from(bundles)? * 99,
                "price for {quantity}"
            );
        }

        Ok(())
    }

    #[test]
    fn builder_rejects_zero_bundle_size() {
        assert_eq!(
            multi_buy_rule_for("A").buy(0).at_price(Decimal::ONE),
            Err(RuleError::InvalidBundleSize(0))
        );
    }

    #[test]
    fn builder_without_buy_is_rejected() {
        assert_eq!(
            multi_buy_rule_for("A").at_price(Decimal::ONE),
            Err(RuleError::InvalidBundleSize(0))
        );
    }
}
