//! Orbit kinematics
//!
//! Orbs sit on circles around the screen center. Only the angle is stored;
//! the cartesian position is derived on demand. Angles are never wrapped,
//! the trig functions take care of periodicity.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameState, OrbColor, PALETTE};
use crate::polar_to_cartesian;

/// A colored target circling the center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orb {
    pub id: u32,
    pub color: OrbColor,
    /// Orbit radius (pixels)
    pub radius: f32,
    /// Current orbit angle (radians, unbounded)
    pub angle: f32,
    /// Signed angle increment per tick, before the speed modifier
    pub angular_speed: f32,
}

impl Orb {
    /// Advance one tick along the orbit
    #[inline]
    pub fn advance(&mut self, speed_modifier: f32) {
        self.angle += self.angular_speed * speed_modifier;
    }

    /// Cartesian position for an orbit around `center`
    #[inline]
    pub fn position(&self, center: Vec2) -> Vec2 {
        center + polar_to_cartesian(self.radius, self.angle)
    }
}

/// Populate the initial ring of orbs for a session
///
/// Orb `i` of `n` starts at angle `2π·i/n` on radius band `i % bands`, with a
/// color drawn uniformly from the difficulty's palette prefix and a jittered
/// angular speed.
pub fn generate_orbs<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    let count = state.params.orb_count;
    let colors = &PALETTE[..state.params.available_colors.clamp(1, PALETTE.len())];
    let base = state.tuning.base_angular_speed;
    let jitter = state.tuning.angular_jitter;

    for i in 0..count {
        let color = colors[rng.random_range(0..colors.len())];
        let radius = state.tuning.orbit_radius(i);
        let angle = TAU * i as f32 / count as f32;
        let angular_speed = base + rng.random_range(-jitter..=jitter);
        state.add_orb(color, radius, angle, angular_speed);
    }

    log::debug!("Generated {} orbs over {} colors", count, colors.len());
}
