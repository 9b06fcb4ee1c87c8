//! Utils

use clap::Parser;

use crate::items::Item;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
pub struct ExampleCheckoutArgs {
    /// Fixture set to load rules from
    #[clap(short, long, default_value = "weekly")]
    pub fixture: String,

    /// Directory holding the fixture sets
    #[clap(short, long, default_value = "./fixtures")]
    pub base_path: String,

    /// SKUs to scan, in order; defaults to the fixture basket
    pub items: Vec<String>,
}

impl ExampleCheckoutArgs {
    /// Items given on the command line, if any.
    pub fn items(&self) -> Option<Vec<Item>> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.iter().map(String::as_str).map(Item::from).collect())
        }
    }
}
