//! Runtime configuration.
//!
//! Defaults are overridden by the command line, which in turn reads
//! `INVENTORY_STORE` and `INVENTORY_CHANNEL_CAPACITY` from the environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;

pub const DEFAULT_STORE: &str = "Inventarioproductos.csv";
pub const DEFAULT_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// File the inventory is loaded from and saved to.
    pub store_path: PathBuf,
    /// Requests that may queue in front of the actor before senders wait.
    pub channel_capacity: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE),
            channel_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl InventoryConfig {
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            ..Self::default()
        }
    }

    /// Layers the command-line values over the defaults. A zero capacity is
    /// ignored, since the channel needs room for at least one request.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::default();
        if let Some(path) = &cli.store {
            config.store_path = path.clone();
        }
        if let Some(capacity) = cli.capacity.filter(|&c| c > 0) {
            config.channel_capacity = capacity;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;

    #[test]
    fn cli_overrides_defaults() {
        let cli = Cli {
            store: Some("data/stock.csv".into()),
            capacity: Some(0),
            command: Command::List,
        };
        let config = InventoryConfig::from_cli(&cli);
        assert_eq!(config.store_path, PathBuf::from("data/stock.csv"));
        assert_eq!(config.channel_capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: InventoryConfig = serde_json::from_str(r#"{"channel_capacity":4}"#).unwrap();
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE));
        assert_eq!(config.channel_capacity, 4);
    }
}
