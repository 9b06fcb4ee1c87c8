//! Checkout Example
//!
//! Loads a rule fixture and prints the basket total.
//!
//! Use `-f` to load a fixture set by name
//! Pass SKUs as arguments to scan them instead of the fixture basket
//! Set `RUST_LOG=checkout=debug` to log each rule application

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use checkout::{fixtures::Fixture, transaction::Transaction, utils::ExampleCheckoutArgs};

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = ExampleCheckoutArgs::parse();

    let mut fixture = Fixture::with_base_path(&args.base_path);
    fixture.load_rules(&args.fixture)?;

    let checkout = fixture.checkout()?;

    let transaction = match args.items() {
        Some(items) => {
            let mut transaction = Transaction::new(fixture.rules())?;
            transaction.scan_all(&items)?;
            transaction
        }
        None => fixture.transaction()?,
    };

    for rule in fixture.rules() {
        println!("{rule}");
    }

    println!(
        "\nTotal: {} ({} items)",
        checkout.calculate_total_amount(&transaction)?,
        transaction.basket().total_quantity()
    );

    Ok(())
}
