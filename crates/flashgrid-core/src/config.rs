//! Page configuration
//!
//! Read once at startup from a JSON file. Every field is optional:
//!
//! ```json
//! {
//!   "base": { "grid_min": 280, "gap": 32 },
//!   "flip": { "midpoint_ms": 200, "settle_ms": 400, "policy": "overlap" },
//!   "initial_columns": 5
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::deck::{sample_deck, DeckSection};
use crate::error::GridResult;
use crate::flip::FlipTiming;
use crate::preset::{BasePreset, ColumnPreset};

/// Config file name inside the app's config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Reference dimensions at 4 per row
    pub base: BasePreset,
    pub flip: FlipTiming,
    /// Row selector value on load
    pub initial_columns: ColumnPreset,
    pub sections: Vec<DeckSection>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            base: BasePreset::default(),
            flip: FlipTiming::default(),
            initial_columns: ColumnPreset::default(),
            sections: sample_deck(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> GridResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> GridResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Like [`PageConfig::load`], but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> GridResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}
