//! Gameplay balance knobs
//!
//! Every field has a default, so a tuning file only needs the values it
//! overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::control::FollowPid;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Camera easing ===
    pub camera_kp: f32,
    pub camera_ki: f32,
    pub camera_kd: f32,

    // === Scoring ===
    /// Points credited for each enemy a grenade destroys
    pub points_per_kill: i32,

    // === Simulation ===
    /// Probability (0..1) that a thrown grenade destroys an enemy
    pub hit_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            camera_kp: 0.3,
            camera_ki: 0.05,
            camera_kd: 0.0,
            points_per_kill: 100,
            hit_chance: 0.6,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the tuning to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Tuning saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Camera controller built from the easing gains
    pub fn camera(&self) -> FollowPid {
        FollowPid::new(self.camera_kp, self.camera_ki, self.camera_kd)
    }

    /// Hit chance clamped to a valid probability (NaN counts as 0)
    pub fn effective_hit_chance(&self) -> f64 {
        if self.hit_chance.is_nan() {
            0.0
        } else {
            self.hit_chance.clamp(0.0, 1.0)
        }
    }
}
