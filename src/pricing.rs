//! Prices
//!
//! Conversions between decimal currency amounts and integer minor units. Totals
//! are accumulated in minor units and only turned back into a decimal at output.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use thiserror::Error;

/// Number of decimal places kept for currency amounts.
const CURRENCY_DP: u32 = 2;

/// Errors that can occur while converting a decimal price into minor units.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// Prices can't be negative.
    #[error("price {0} is negative")]
    Negative(Decimal),

    /// The price doesn't fit in minor units.
    #[error("price {0} is out of range")]
    OutOfRange(Decimal),
}

/// Converts a decimal price (e.g. `1.30`) into whole minor units (e.g. `130`).
///
/// The price is scaled by 100 and rounded to two places towards positive
/// infinity, after which any remaining fraction of a minor unit is dropped.
///
/// # Errors
///
/// - [`PriceError::Negative`]: the price is below zero.
/// - [`PriceError::OutOfRange`]: the scaled price doesn't fit in an `i64`.
pub fn to_minor_units(price: Decimal) -> Result<i64, PriceError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(PriceError::Negative(price));
    }

    price
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|scaled| {
            scaled.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::ToPositiveInfinity)
        })
        .and_then(|scaled| scaled.trunc().to_i64())
        .ok_or(PriceError::OutOfRange(price))
}

/// Converts minor units into a decimal currency amount with two decimal places.
///
/// Both the scaling step and the division are rounded towards positive infinity.
pub fn to_major_units(minor: i64) -> Decimal {
    let scaled = Decimal::from(minor)
        .round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::ToPositiveInfinity);

    let mut amount = (scaled / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::ToPositiveInfinity);

    amount.rescale(CURRENCY_DP);

    amount
}
