//! Checkout
//!
//! Checkout prices a shopping basket against a set of per-item pricing rules:
//! flat unit prices and "buy N for P" multi-buy offers.
//!
//! ```
//! use checkout::prelude::*;
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rules: RuleSet = [
//!     unit_rule_for("A").at_price(Decimal::new(50, 2))?,
//!     multi_buy_rule_for("A").buy(3).at_price(Decimal::new(130, 2))?,
//! ]
//! .into_iter()
//! .collect();
//!
//! let checkout = Checkout::default();
//! let a = Item::new("A");
//!
//! let mut transaction = checkout.transaction(&rules)?;
//! transaction.scan(&a)?.scan(&a)?.scan(&a)?.scan(&a)?;
//!
//! assert_eq!(checkout.calculate_total_amount(&transaction)?.to_string(), "1.80");
//! # Ok(())
//! # }
//! ```

pub mod basket;
pub mod checkout;
pub mod config;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod rules;
pub mod transaction;
pub mod utils;
pub mod validation;
