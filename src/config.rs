use crate::constants::*;
use crate::error::*;
use serde::{Deserialize, Serialize};

/// Tunables for decorating a room. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Attempt budget for items that don't set their own.
    #[serde(default = "default_attempts")]
    pub default_attempts: u32,
    /// Give large items a one-cell buffer ring.
    #[serde(default = "default_buffer_large_items")]
    pub buffer_large_items: bool,
    /// Area (in cells) at which an item counts as large.
    #[serde(default = "default_large_item_area")]
    pub large_item_area: u32,
    /// Seed for reproducible decoration. `None` draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_buffer_large_items() -> bool {
    true
}

fn default_large_item_area() -> u32 {
    DEFAULT_LARGE_ITEM_AREA
}

impl Default for PlacementConfig {
    fn default() -> Self {
        PlacementConfig {
            default_attempts: default_attempts(),
            buffer_large_items: default_buffer_large_items(),
            large_item_area: default_large_item_area(),
            seed: None,
        }
    }
}

impl PlacementConfig {
    pub fn from_json(text: &str) -> PlacementResult<Self> {
        let config: PlacementConfig =
            serde_json::from_str(text).map_err(|e| PlacementError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PlacementResult<()> {
        if self.default_attempts == 0 {
            return Err(PlacementError::InvalidConfig {
                reason: "default_attempts must be positive".to_string(),
            });
        }
        if self.large_item_area == 0 {
            return Err(PlacementError::InvalidConfig {
                reason: "large_item_area must be positive".to_string(),
            });
        }
        Ok(())
    }
}
