//! Validation
//!
//! Input checks run when a transaction is created and when items are scanned.
//! Totals are never validated: anything in a basket was already accepted here.

use thiserror::Error;

use crate::{items::Item, rules::RuleSet};

/// Errors raised for invalid checkout input.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A transaction needs at least one pricing rule.
    #[error("please provide a set of pricing rules")]
    EmptyRuleSet,

    /// No rule in the active rule set prices the item.
    #[error("item {0} has not been priced yet; please remove it from the basket")]
    UnpricedItem(Item),
}

/// Check that a rule set can back a transaction.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyRuleSet`] if `rules` is empty.
pub fn validate_rule_set(rules: &RuleSet) -> Result<(), ValidationError> {
    if rules.is_empty() {
        Err(ValidationError::EmptyRuleSet)
    } else {
        Ok(())
    }
}

/// Check that `item` is priced by at least one rule.
///
/// # Errors
///
/// Returns [`ValidationError::UnpricedItem`] carrying the item if no rule prices it.
pub fn validate_item(item: &Item, rules: &RuleSet) -> Result<(), ValidationError> {
    if rules.prices(item) {
        Ok(())
    } else {
        Err(ValidationError::UnpricedItem(item.clone()))
    }
}
