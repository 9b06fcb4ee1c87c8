//! Pricing Rules

use std::fmt;

use thiserror::Error;

use crate::{items::Item, pricing::PriceError};

mod multi_buy;
mod set;
mod unit;

pub use multi_buy::*;
pub use set::*;
pub use unit::*;

/// Errors related to building or applying pricing rules.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    /// The rule price couldn't be converted into minor units.
    #[error(transparent)]
    Price(#[from] PriceError),

    /// Multi-buy bundles must contain at least one item.
    #[error("bundle size must be at least 1, got {0}")]
    InvalidBundleSize(u32),

    /// Applying the rule overflowed the price.
    #[error("price overflowed applying rule for {item} to quantity {quantity}")]
    Overflow {
        /// Item the rule prices
        item: Item,

        /// Quantity the rule was applied to
        quantity: u64,
    },
}

/// The price charged and quantity consumed by applying a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleApplication {
    /// Price charged, in minor units
    pub price: i64,

    /// Quantity of the item consumed
    pub quantity: u64,
}

/// Which variant a rule is, used to spot duplicate rules for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Flat per-item price
    Unit,

    /// Buy N for price P
    MultiBuy,
}

/// Pricing rule enum
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PricingRule {
    /// Unit Rule
    Unit(UnitRule),

    /// Multi-Buy Rule
    MultiBuy(MultiBuyRule),
}

impl PricingRule {
    /// Return the item this rule prices.
    pub fn item(&self) -> &Item {
        match self {
            PricingRule::Unit(unit) => unit.item(),
            PricingRule::MultiBuy(multi_buy) => multi_buy.item(),
        }
    }

    /// Return the rule variant.
    pub const fn kind(&self) -> RuleKind {
        match self {
            PricingRule::Unit(_) => RuleKind::Unit,
            PricingRule::MultiBuy(_) => RuleKind::MultiBuy,
        }
    }

    /// Rules with a higher priority are applied first.
    pub const fn priority(&self) -> u8 {
        match self {
            PricingRule::Unit(_) => UnitRule::PRIORITY,
            PricingRule::MultiBuy(_) => MultiBuyRule::PRIORITY,
        }
    }

    /// Apply the rule to a quantity of its item.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Overflow`] if the price doesn't fit in minor units.
    pub fn apply(&self, quantity: u64) -> Result<RuleApplication, RuleError> {
        match self {
            PricingRule::Unit(unit) => unit.apply(quantity),
            PricingRule::MultiBuy(multi_buy) => multi_buy.apply(quantity),
        }
    }
}

impl From<UnitRule> for PricingRule {
    fn from(rule: UnitRule) -> Self {
        PricingRule::Unit(rule)
    }
}

impl From<MultiBuyRule> for PricingRule {
    fn from(rule: MultiBuyRule) -> Self {
        PricingRule::MultiBuy(rule)
    }
}

impl fmt::Display for PricingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingRule::Unit(unit) => fmt::Display::fmt(unit, f),
            PricingRule::MultiBuy(multi_buy) => fmt::Display::fmt(multi_buy, f),
        }
    }
}

/// Multiply a quantity by a minor-unit price, reporting overflow against `item`.
fn checked_price(item: &Item, count: u64, price: i64, quantity: u64) -> Result<i64, RuleError> {
    i64::try_from(count)
        .ok()
        .and_then(|count| count.checked_mul(price))
        .ok_or_else(|| RuleError::Overflow {
            item: item.clone(),
            quantity,
        })
}
