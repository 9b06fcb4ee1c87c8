//! Checkout
//!
//! Totals a transaction by walking its rules in priority order. Each rule takes
//! what it can from the remaining quantity of its item and leaves the rest for
//! the rules after it, so multi-buy bundles are priced before unit prices.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    config::CheckoutConfig,
    pricing::to_major_units,
    rules::{RuleError, RuleSet},
    transaction::Transaction,
    validation::ValidationError,
};

/// Errors that can occur while calculating a total.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// Applying a rule failed.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// The running total no longer fits in minor units.
    #[error("basket total overflowed")]
    Overflow,
}

/// Checkout engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkout {
    config: CheckoutConfig,
}

impl Checkout {
    /// Create a checkout with the given configuration.
    #[must_use]
    pub const fn new(config: CheckoutConfig) -> Self {
        Self { config }
    }

    /// Return the configuration.
    pub const fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// Start a transaction priced by `rules`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyRuleSet`] if `rules` is empty.
    #[expect(
        clippy::unused_self,
        reason = "transactions are started from the checkout that totals them"
    )]
    pub fn transaction<'a>(
        &self,
        rules: &'a RuleSet,
    ) -> Result<Transaction<'a>, ValidationError> {
        Transaction::new(rules)
    }

    /// Calculate the total of a transaction in minor units.
    ///
    /// The transaction is not modified, so repeated calls give the same total.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Rule`]: a rule price overflowed.
    /// - [`CheckoutError::Overflow`]: the running total overflowed.
    #[tracing::instrument(
        name = "checkout.calculate_total",
        skip_all,
        fields(items = transaction.basket().len(), rules = transaction.rules().len())
    )]
    pub fn calculate_total_minor(
        &self,
        transaction: &Transaction<'_>,
    ) -> Result<i64, CheckoutError> {
        if transaction.basket().is_empty() {
            return Ok(0);
        }

        let mut remaining = transaction.basket().clone();
        let mut total: i64 = 0;

        for rule in transaction.rules().ordered() {
            let item = rule.item();

            let Some(quantity) = remaining.quantity(item) else {
                continue;
            };

            let applied = rule.apply(quantity)?;

            total = total
                .checked_add(applied.price)
                .ok_or(CheckoutError::Overflow)?;

            remaining.set_quantity(
                item,
                self.config.remainder.remaining(quantity, applied.quantity),
            );

            debug!(
                rule = %rule,
                quantity,
                consumed = applied.quantity,
                price = applied.price,
                total,
                "applied pricing rule"
            );
        }

        Ok(total)
    }

    /// Calculate the total of a transaction as a two-place decimal amount.
    ///
    /// # Errors
    ///
    /// See [`Checkout::calculate_total_minor`].
    pub fn calculate_total_amount(
        &self,
        transaction: &Transaction<'_>,
    ) -> Result<Decimal, CheckoutError> {
        Ok(to_major_units(self.calculate_total_minor(transaction)?))
    }

    /// Calculate the total of a transaction in the configured currency.
    ///
    /// # Errors
    ///
    /// See [`Checkout::calculate_total_minor`].
    pub fn calculate_total(
        &self,
        transaction: &Transaction<'_>,
    ) -> Result<Money<'static, Currency>, CheckoutError> {
        let amount = self.calculate_total_amount(transaction)?;

        Ok(Money::from_decimal(amount, self.config.currency))
    }
}
