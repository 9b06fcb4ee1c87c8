//! Rule Sets

use std::cmp::Reverse;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::warn;

use crate::{
    items::Item,
    rules::{PricingRule, RuleKind},
};

/// A set of pricing rules holding at most one rule per item and rule kind.
///
/// Rules keep the order they were inserted in, which is also the tie-break
/// between rules of equal priority when ordering.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<PricingRule>,
    keys: FxHashSet<(Item, RuleKind)>,
}

impl RuleSet {
    /// Create an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule to the set.
    ///
    /// Returns `false` and leaves the set unchanged if it already holds a rule
    /// of the same kind for the same item. The first rule wins.
    pub fn insert(&mut self, rule: PricingRule) -> bool {
        let key = (rule.item().clone(), rule.kind());

        if self.keys.contains(&key) {
            let conflicting = self
                .rules
                .iter()
                .find(|existing| existing.item() == rule.item() && existing.kind() == rule.kind())
                .filter(|existing| **existing != rule);

            if let Some(existing) = conflicting {
                warn!(kept = %existing, dropped = %rule, "ignoring duplicate pricing rule");
            }

            return false;
        }

        self.keys.insert(key);
        self.rules.push(rule);

        true
    }

    /// Check whether any rule prices `item`.
    pub fn prices(&self, item: &Item) -> bool {
        self.rules.iter().any(|rule| rule.item() == item)
    }

    /// Rules sorted by descending priority, in insertion order within a priority.
    pub fn ordered(&self) -> SmallVec<[&PricingRule; 8]> {
        let mut ordered: SmallVec<[&PricingRule; 8]> = self.rules.iter().collect();

        ordered.sort_by_key(|rule| Reverse(rule.priority()));

        ordered
    }

    /// Iterate over the rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PricingRule> {
        self.rules.iter()
    }

    /// Get the number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Extend<PricingRule> for RuleSet {
    fn extend<I: IntoIterator<Item = PricingRule>>(&mut self, rules: I) {
        for rule in rules {
            self.insert(rule);
        }
    }
}

impl FromIterator<PricingRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = PricingRule>>(rules: I) -> Self {
        let mut set = Self::new();

        set.extend(rules);

        set
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a PricingRule;
    type IntoIter = std::slice::Iter<'a, PricingRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
