//! Rule Fixtures

use rust_decimal::Decimal;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::{
    config::RemainderPolicy,
    fixtures::FixtureError,
    items::Item,
    rules::{PricingRule, multi_buy_rule_for, unit_rule_for},
};

/// A rule set file in YAML
#[derive(Debug, Deserialize)]
pub struct RulesFixture {
    /// Currency code; inferred from the first price when omitted
    #[serde(default)]
    pub currency: Option<String>,

    /// Remaining-quantity policy; earlier files' policy is kept when omitted
    #[serde(default)]
    pub remainder: Option<RemainderPolicy>,

    /// Pricing rules, in priority tie-break order
    pub rules: Vec<RuleFixture>,

    /// SKUs to scan into a transaction
    #[serde(default)]
    pub basket: Vec<String>,
}

/// Pricing rule fixture from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleFixture {
    /// Flat per-item price
    Unit {
        /// Item SKU
        item: String,

        /// Unit price (e.g., "0.50 GBP")
        price: String,
    },

    /// Buy N for price P
    MultiBuy {
        /// Item SKU
        item: String,

        /// Bundle size
        quantity: u32,

        /// Bundle price (e.g., "1.30 GBP")
        price: String,
    },
}

impl RuleFixture {
    /// Return the price string of the rule.
    pub fn price(&self) -> &str {
        match self {
            RuleFixture::Unit { price, .. } | RuleFixture::MultiBuy { price, .. } => price,
        }
    }

    /// Convert to a `PricingRule`, checking the price is in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if the price can't be parsed, is in another currency,
    /// or the rule itself is invalid.
    pub fn try_into_rule(self, currency: &'static Currency) -> Result<PricingRule, FixtureError> {
        let (amount, price_currency) = parse_price(self.price())?;

        if price_currency != currency {
            return Err(FixtureError::CurrencyMismatch(
                currency.iso_alpha_code.to_string(),
                price_currency.iso_alpha_code.to_string(),
            ));
        }

        let rule = match self {
            RuleFixture::Unit { item, .. } => unit_rule_for(Item::new(item)).at_price(amount)?,
            RuleFixture::MultiBuy { item, quantity, .. } => multi_buy_rule_for(Item::new(item))
                .buy(quantity)
                .at_price(amount)?,
        };

        Ok(rule)
    }
}

/// Parse price string (e.g., "1.30 GBP") into a decimal amount and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((amount, parse_currency(currency_code)?))
}

/// Parse a currency code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for codes other than GBP, USD and EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}
