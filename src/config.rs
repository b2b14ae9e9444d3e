//! Kart model constants and playback timestep
//!
//! Loaded once before a replay starts and handed to each ghost.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GhostError;

/// Per-kart playback configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    /// Engine top speed used to normalize nitro intensity (m/s)
    pub max_engine_speed: f32,
    /// Kart length (m), the front point sits half of it ahead of the center
    pub kart_length: f32,
    /// Lowest point of the visual model relative to its pivot
    pub model_lowest_point: f32,
    /// Fixed timestep of the owning game loop (s)
    pub sim_dt: f32,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            max_engine_speed: DEFAULT_MAX_ENGINE_SPEED,
            kart_length: DEFAULT_KART_LENGTH,
            model_lowest_point: 0.0,
            sim_dt: SIM_DT,
        }
    }
}

impl GhostConfig {
    /// Parse from JSON, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, GhostError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file, or defaults if the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GhostError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GhostError> {
        if !(self.max_engine_speed > 0.0) {
            return Err(GhostError::Config(format!(
                "max_engine_speed must be positive, got {}",
                self.max_engine_speed
            )));
        }
        if !(self.kart_length >= 0.0) {
            return Err(GhostError::Config(format!(
                "kart_length must not be negative, got {}",
                self.kart_length
            )));
        }
        if !(self.sim_dt > 0.0) {
            return Err(GhostError::Config(format!(
                "sim_dt must be positive, got {}",
                self.sim_dt
            )));
        }
        if !self.model_lowest_point.is_finite() {
            return Err(GhostError::Config("model_lowest_point must be finite".to_string()));
        }
        Ok(())
    }

    /// Offset from kart center to its nose, in kart-local space
    pub fn front_offset(&self) -> glam::Vec3 {
        crate::KART_FORWARD * (self.kart_length * 0.5)
    }
}
