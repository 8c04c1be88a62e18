//! Command-line interface definition and parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Track products in a semicolon-delimited inventory file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the inventory file. Created on the first change if missing.
    #[arg(short, long, env = "INVENTORY_STORE")]
    pub store: Option<PathBuf>,

    /// Capacity of the request channel in front of the inventory actor.
    #[arg(long, env = "INVENTORY_CHANNEL_CAPACITY")]
    pub capacity: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print every product as a JSON line.
    List,
    /// Print one product.
    Show { code: String },
    /// Add a product, replacing any product with the same code.
    Add {
        code: String,
        category: String,
        name: String,
        quantity: String,
        price: String,
    },
    /// Print products matching a code, or part of a name or category.
    Search { criterion: String },
    /// Remove a product.
    Delete { code: String },
    /// Change the quantity by a signed amount, e.g. `-3`.
    Adjust {
        code: String,
        #[arg(allow_hyphen_values = true)]
        delta: String,
    },
    /// Set a new, positive price.
    SetPrice {
        code: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
}

impl Cli {
    /// Parse command-line arguments without exiting on error.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_delta_is_a_value_not_a_flag() {
        let cli = Cli::try_parse_from(["inventory", "adjust", "A1", "-3"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Adjust {
                code: "A1".into(),
                delta: "-3".into()
            }
        );
    }

    #[test]
    fn store_flag_is_optional() {
        let cli = Cli::try_parse_from(["inventory", "--store", "x.csv", "list"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("x.csv")));
        assert_eq!(cli.command, Command::List);
    }
}
