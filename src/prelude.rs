//! Checkout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::Basket,
    checkout::{Checkout, CheckoutError},
    config::{CheckoutConfig, RemainderPolicy},
    fixtures::{Fixture, FixtureError},
    items::Item,
    pricing::{PriceError, to_major_units, to_minor_units},
    rules::{
        MultiBuyRule, PricingRule, RuleApplication, RuleError, RuleKind, RuleSet, UnitRule,
        multi_buy_rule_for, unit_rule_for,
    },
    transaction::Transaction,
    validation::ValidationError,
};
