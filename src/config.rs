//! Checkout Configuration

use rusty_money::iso::{self, Currency};
use serde::Deserialize;

/// What happens to an item's remaining quantity after a rule is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// Subtract the consumed quantity, except when exactly one unit was
    /// priced: that unit stays in the basket for later rules.
    #[default]
    RetainSingleUnit,

    /// Always subtract the consumed quantity.
    Consume,
}

impl RemainderPolicy {
    /// Quantity left for later rules after `consumed` of `quantity` was priced.
    pub const fn remaining(self, quantity: u64, consumed: u64) -> u64 {
        match self {
            RemainderPolicy::RetainSingleUnit if quantity == 1 => quantity,
            RemainderPolicy::RetainSingleUnit | RemainderPolicy::Consume => {
                quantity.saturating_sub(consumed)
            }
        }
    }
}

/// Checkout configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckoutConfig {
    /// Currency totals are reported in
    pub currency: &'static Currency,

    /// Remaining-quantity policy used while accumulating totals
    pub remainder: RemainderPolicy,
}

impl CheckoutConfig {
    /// Create a config for the given currency with the default remainder policy.
    #[must_use]
    pub const fn new(currency: &'static Currency) -> Self {
        Self {
            currency,
            remainder: RemainderPolicy::RetainSingleUnit,
        }
    }

    /// Replace the remainder policy.
    #[must_use]
    pub const fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self::new(iso::GBP)
    }
}
