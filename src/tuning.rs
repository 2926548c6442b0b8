//! Data-driven game balance
//!
//! Defaults come from [`crate::consts`]; any field may be overridden from a
//! JSON file. Missing fields keep their default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::collision::Aabb;

/// Errors from loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Projectile travel per tick (pixels)
    pub projectile_speed: f32,
    /// Orb collision box edge (pixels)
    pub orb_size: f32,
    /// Projectile collision box edge (pixels)
    pub projectile_size: f32,
    /// Orbit radii, cycled by orb index
    pub orbit_bands: Vec<f32>,
    /// Base angular speed (radians per tick)
    pub base_angular_speed: f32,
    /// Angular speed jitter (±, radians per tick)
    pub angular_jitter: f32,
    pub starting_lives: u8,
    pub match_points: u64,
    pub combo_step: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            projectile_speed: PROJECTILE_SPEED,
            orb_size: ORB_SIZE,
            projectile_size: PROJECTILE_SIZE,
            orbit_bands: ORBIT_BANDS.to_vec(),
            base_angular_speed: ORB_BASE_ANGULAR_SPEED,
            angular_jitter: ORB_ANGULAR_JITTER,
            starting_lives: STARTING_LIVES,
            match_points: MATCH_POINTS,
            combo_step: COMBO_STEP,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, v: f32) -> Result<(), TuningError> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("orb_size", self.orb_size)?;
        positive("projectile_size", self.projectile_size)?;

        if self.orbit_bands.is_empty() {
            return Err(TuningError::Invalid {
                field: "orbit_bands",
                reason: "needs at least one radius",
            });
        }
        if self.orbit_bands.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(TuningError::Invalid {
                field: "orbit_bands",
                reason: "radii must be finite and non-negative",
            });
        }
        if !self.base_angular_speed.is_finite() {
            return Err(TuningError::Invalid {
                field: "base_angular_speed",
                reason: "must be finite",
            });
        }
        if !self.angular_jitter.is_finite() || self.angular_jitter < 0.0 {
            return Err(TuningError::Invalid {
                field: "angular_jitter",
                reason: "must be finite and non-negative",
            });
        }
        if self.starting_lives == 0 {
            return Err(TuningError::Invalid {
                field: "starting_lives",
                reason: "must be at least 1",
            });
        }
        if self.combo_step == 0 {
            return Err(TuningError::Invalid {
                field: "combo_step",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Screen center, where the launcher sits and orbs circle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Playfield rectangle projectiles must stay inside
    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.screen_width, self.screen_height))
    }

    /// Orbit radius for the orb at `index` (0 if no bands are configured)
    pub fn orbit_radius(&self, index: usize) -> f32 {
        let bands = self.orbit_bands.len().max(1);
        self.orbit_bands.get(index % bands).copied().unwrap_or(0.0)
    }
}
