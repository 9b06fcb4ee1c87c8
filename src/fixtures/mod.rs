//! Fixtures
//!
//! Rule sets and checkout configuration loaded from YAML files under
//! `<base>/rules/<name>.yml`.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    checkout::Checkout,
    config::{CheckoutConfig, RemainderPolicy},
    fixtures::rules::{RulesFixture, parse_currency, parse_price},
    items::Item,
    rules::{RuleError, RuleSet},
    transaction::Transaction,
    validation::ValidationError,
};

pub mod rules;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between rules
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No rules loaded yet
    #[error("No rules loaded yet; currency unknown")]
    NoCurrency,

    /// Invalid pricing rule
    #[error("Invalid pricing rule: {0}")]
    Rule(#[from] RuleError),

    /// Invalid rule set or basket
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Rules from every loaded file, in load order
    rules: RuleSet,

    /// SKUs to scan into a transaction, in load order
    basket: Vec<Item>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,

    /// Remainder policy from the most recent file that sets one
    remainder: RemainderPolicy,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            rules: RuleSet::new(),
            basket: Vec::new(),
            currency: None,
            remainder: RemainderPolicy::default(),
        }
    }

    /// Load rules from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a rule is
    /// invalid, or if its currency differs from rules already loaded. A file
    /// that fails to load leaves the fixture unchanged.
    pub fn load_rules(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("rules").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: RulesFixture = serde_norway::from_str(&contents)?;

        let currency = self.resolve_currency(&fixture)?;

        let rules = fixture
            .rules
            .into_iter()
            .map(|rule_fixture| rule_fixture.try_into_rule(currency))
            .collect::<Result<Vec<_>, _>>()?;

        self.rules.extend(rules);
        self.currency = Some(currency);

        if let Some(remainder) = fixture.remainder {
            self.remainder = remainder;
        }

        self.basket.extend(fixture.basket.into_iter().map(Item::new));

        debug!(
            path = %file_path.display(),
            rules = self.rules.len(),
            basket = self.basket.len(),
            "loaded rule fixture"
        );

        Ok(self)
    }

    /// Load a fixture set by name
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_rules(name)?;

        Ok(fixture)
    }

    /// Work out the currency for a newly parsed file.
    fn resolve_currency(&self, fixture: &RulesFixture) -> Result<&'static Currency, FixtureError> {
        let declared = match fixture.currency.as_deref() {
            Some(code) => Some(parse_currency(code)?),
            None => match fixture.rules.first() {
                Some(rule) => Some(parse_price(rule.price())?.1),
                None => None,
            },
        };

        match (self.currency, declared) {
            (Some(existing), Some(declared)) if existing != declared => {
                Err(FixtureError::CurrencyMismatch(
                    existing.iso_alpha_code.to_string(),
                    declared.iso_alpha_code.to_string(),
                ))
            }
            (Some(currency), _) | (None, Some(currency)) => Ok(currency),
            (None, None) => Err(FixtureError::NoCurrency),
        }
    }

    /// Get the loaded rules
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Get the basket SKUs
    pub fn basket(&self) -> &[Item] {
        &self.basket
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no rules have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    /// Get the checkout configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no rules have been loaded yet.
    pub fn config(&self) -> Result<CheckoutConfig, FixtureError> {
        Ok(CheckoutConfig::new(self.currency()?).with_remainder(self.remainder))
    }

    /// Create a checkout using the fixture configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no rules have been loaded yet.
    pub fn checkout(&self) -> Result<Checkout, FixtureError> {
        Ok(Checkout::new(self.config()?))
    }

    /// Create a transaction over the loaded rules with the basket scanned in
    ///
    /// # Errors
    ///
    /// Returns an error if no rules are loaded or a basket item is unpriced.
    pub fn transaction(&self) -> Result<Transaction<'_>, FixtureError> {
        let mut transaction = Transaction::new(&self.rules)?;

        transaction.scan_all(&self.basket)?;

        Ok(transaction)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
