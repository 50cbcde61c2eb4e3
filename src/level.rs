//! Level definitions
//!
//! Loaded from JSON, e.g. `{ "badge_scale": 100, "enemies": 2, "grenades": 3 }`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Parameters for starting a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Points needed per badge (non-positive is treated as 1)
    pub badge_scale: i32,
    /// Enemies placed in the level
    pub enemies: i32,
    /// Grenades available to clear it
    pub grenades: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            badge_scale: 1,
            enemies: 0,
            grenades: 0,
        }
    }
}

impl LevelConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a level definition from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let level = Self::from_json(&json)?;
        log::info!("Loaded level from {}", path.as_ref().display());
        Ok(level)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the level to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Level saved to {}", path.as_ref().display());
        Ok(())
    }
}
