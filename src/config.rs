//! Startup configuration.
//!
//! Defaults cover a single restaurant out of the box. The only setting read
//! from the environment is the kitchen channel capacity:
//!
//! - `RESTAURANT_CHANNEL_CAPACITY` - requests the kitchen actor can queue (default 32)
//!
//! Logging is configured separately through `RUST_LOG`, see
//! [`setup_tracing`](crate::lifecycle::setup_tracing).

use crate::model::Menu;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CHANNEL_CAPACITY_VAR: &str = "RESTAURANT_CHANNEL_CAPACITY";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantConfig {
    /// Bounded channel size between clients and the kitchen actor.
    pub channel_capacity: usize,
    /// Items offered at the front desk.
    pub menu: Menu,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            menu: Menu::default(),
        }
    }
}

impl RestaurantConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match value.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: CHANNEL_CAPACITY_VAR.to_string(),
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
