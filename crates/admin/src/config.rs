//! Console configuration, loaded from YAML.
//!
//! ```yaml
//! store:
//!   buffer_size: 64
//! stock:
//!   Circuit: 300
//!   First star: 400
//! operators:
//!   - email: desk@tulipa.test
//!     password: bloom
//! ```
//!
//! Without a `stock` section the standard capacity table is used. A configured table
//! replaces it completely; varieties left out are unknown to the ledger.

use crate::auth::Operator;
use crate::ledger::StockCapacity;
use crate::model::{UnknownVariety, Variety};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid stock table: {0}")]
    Stock(#[from] UnknownVariety),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Request channel capacity of the order collection.
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub store: StoreConfig,
    /// Variety name to capacity.
    pub stock: Option<BTreeMap<String, u32>>,
    pub operators: Vec<Operator>,
}

impl ConsoleConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string. Variety names are checked here.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.capacity()?;
        Ok(config)
    }

    /// The capacity table this configuration describes.
    pub fn capacity(&self) -> Result<StockCapacity, UnknownVariety> {
        match &self.stock {
            None => Ok(StockCapacity::standard()),
            Some(table) => table
                .iter()
                .map(|(name, capacity)| name.parse::<Variety>().map(|v| (v, *capacity)))
                .collect(),
        }
    }
}
