//! Integration tests for basket totals.
//!
//! Two weekly price lists are used:
//!
//! Weekly prices:
//!    - A: £0.50, or 3 for £1.30
//!    - B: £0.30, or 2 for £0.45
//!    - C: £2.00
//!    - D: £0.75
//!
//! Offer prices:
//!    - A: £0.50, or 3 for £1.30
//!    - B: £0.30, or 2 for £0.45
//!    - C: £0.20
//!    - D: £0.15

use rust_decimal::Decimal;
use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use checkout::prelude::*;

fn weekly_prices() -> Result<RuleSet, RuleError> {
    Ok([
        unit_rule_for("A").at_price(Decimal::new(50, 2))?,
        unit_rule_for("B").at_price(Decimal::new(30, 2))?,
        unit_rule_for("C").at_price(Decimal::new(200, 2))?,
        unit_rule_for("D").at_price(Decimal::new(75, 2))?,
        multi_buy_rule_for("A").buy(3).at_price(Decimal::new(130, 2))?,
        multi_buy_rule_for("B").buy(2).at_price(Decimal::new(45, 2))?,
    ]
    .into_iter()
    .collect())
}

fn offer_prices() -> Result<RuleSet, RuleError> {
    Ok([
        unit_rule_for("A").at_price(Decimal::new(50, 2))?,
        unit_rule_for("B").at_price(Decimal::new(30, 2))?,
        unit_rule_for("C").at_price(Decimal::new(20, 2))?,
        unit_rule_for("D").at_price(Decimal::new(15, 2))?,
        multi_buy_rule_for("A").buy(3).at_price(Decimal::new(130, 2))?,
        multi_buy_rule_for("B").buy(2).at_price(Decimal::new(45, 2))?,
    ]
    .into_iter()
    .collect())
}

/// Scan `skus` into a new transaction and return the decimal total.
fn total(rules: &RuleSet, skus: &[&str]) -> TestResult<Decimal> {
    let checkout = Checkout::default();
    let mut transaction = checkout.transaction(rules)?;

    for sku in skus {
        transaction.scan(&Item::new(*sku))?;
    }

    Ok(checkout.calculate_total_amount(&transaction)?)
}

#[test]
fn individually_and_multi_priced_items() -> TestResult {
    let rules = weekly_prices()?;

    assert_eq!(
        total(&rules, &["A", "A", "B", "A", "A", "C", "D"])?,
        Decimal::new(485, 2)
    );

    Ok(())
}

#[test]
fn duplicate_unit_price_does_not_affect_bundle() -> TestResult {
    let rules: RuleSet = [
        unit_rule_for("A").at_price(Decimal::new(60, 2))?,
        unit_rule_for("A").at_price(Decimal::new(25, 2))?,
        multi_buy_rule_for("A").buy(2).at_price(Decimal::new(60, 2))?,
    ]
    .into_iter()
    .collect();

    assert_eq!(rules.len(), 2);
    assert_eq!(total(&rules, &["A", "A"])?, Decimal::new(60, 2));

    Ok(())
}

#[test]
fn nothing_scanned_totals_zero() -> TestResult {
    let rules = weekly_prices()?;
    let checkout = Checkout::default();
    let transaction = checkout.transaction(&rules)?;

    assert_eq!(
        checkout.calculate_total(&transaction)?,
        Money::from_minor(0, GBP)
    );
    assert_eq!(
        checkout.calculate_total_amount(&transaction)?.to_string(),
        "0.00"
    );

    Ok(())
}

#[test]
fn scanning_unpriced_item_fails() -> TestResult {
    let rules: RuleSet = [
        unit_rule_for("A").at_price(Decimal::new(60, 2))?,
        multi_buy_rule_for("B").buy(3).at_price(Decimal::new(50, 2))?,
    ]
    .into_iter()
    .collect();

    let checkout = Checkout::default();
    let mut transaction = checkout.transaction(&rules)?;
    let a = Item::new("A");

    transaction.scan(&a)?.scan(&a)?;

    let result = transaction.scan(&Item::new("C")).map(|_| ());

    assert_eq!(result, Err(ValidationError::UnpricedItem(Item::new("C"))));
    assert_eq!(transaction.basket().quantity(&a), Some(2));
    assert_eq!(transaction.basket().len(), 1);

    Ok(())
}

#[test]
fn multi_buy_without_unit_price() -> TestResult {
    let rules: RuleSet = [
        unit_rule_for("A").at_price(Decimal::new(60, 2))?,
        multi_buy_rule_for("B").buy(3).at_price(Decimal::new(50, 2))?,
    ]
    .into_iter()
    .collect();

    assert_eq!(total(&rules, &["B", "B", "B"])?, Decimal::new(50, 2));

    Ok(())
}

#[test]
fn empty_rule_set_is_rejected() {
    let rules = RuleSet::new();

    assert!(matches!(
        Checkout::default().transaction(&rules),
        Err(ValidationError::EmptyRuleSet)
    ));
}

#[test]
fn individually_priced_items() -> TestResult {
    assert_eq!(total(&offer_prices()?, &["A", "D"])?, Decimal::new(65, 2));

    Ok(())
}

#[test]
fn multi_priced_items() -> TestResult {
    assert_eq!(
        total(&offer_prices()?, &["A", "A", "A", "C"])?,
        Decimal::new(150, 2)
    );

    Ok(())
}

#[test]
fn multi_priced_items_in_any_order() -> TestResult {
    assert_eq!(
        total(&offer_prices()?, &["B", "A", "B"])?,
        Decimal::new(95, 2)
    );

    Ok(())
}

#[test]
fn only_charge_for_multiples_of_offers() -> TestResult {
    assert_eq!(
        total(&offer_prices()?, &["B", "A", "B", "B"])?,
        Decimal::new(125, 2)
    );

    Ok(())
}

#[test]
fn scan_order_does_not_change_total() -> TestResult {
    let rules = weekly_prices()?;

    let forwards = total(&rules, &["A", "B", "A", "C", "B", "A", "D", "A"])?;
    let backwards = total(&rules, &["A", "D", "A", "B", "C", "A", "B", "A"])?;

    assert_eq!(forwards, backwards);

    // 130 + 50 (A x4) + 45 (B x2) + 200 (C) + 75 (D)
    assert_eq!(forwards, Decimal::new(500, 2));

    Ok(())
}

#[test]
fn bundles_are_priced_independently_per_item() -> TestResult {
    let rules = weekly_prices()?;

    for a_count in 0..8_usize {
        for b_count in 0..6_usize {
            let mut skus = vec!["A"; a_count];
            skus.extend(std::iter::repeat_n("B", b_count));

            let a_only = total(&rules, &["A"].repeat(a_count))?;
            let b_only = total(&rules, &["B"].repeat(b_count))?;

            assert_eq!(
                total(&rules, &skus)?,
                a_only + b_only,
                "A x{a_count}, B x{b_count}"
            );
        }
    }

    Ok(())
}

#[test]
fn repeated_totals_are_identical() -> TestResult {
    let rules = weekly_prices()?;
    let checkout = Checkout::default();
    let mut transaction = checkout.transaction(&rules)?;

    for sku in ["A", "A", "A", "A", "B", "B", "B"] {
        transaction.scan(&Item::new(sku))?;
    }

    let first = checkout.calculate_total(&transaction)?;
    let second = checkout.calculate_total(&transaction)?;

    assert_eq!(first, second);
    assert_eq!(first, Money::from_minor(255, GBP));

    Ok(())
}
