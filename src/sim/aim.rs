//! Launcher aiming

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::angle_between;

/// The player's launcher, fixed at the screen center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launcher {
    pub pos: Vec2,
    /// Facing angle (radians, atan2 convention)
    pub angle: f32,
}

impl Launcher {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, angle: 0.0 }
    }

    /// Turn to face `target`
    pub fn aim_at(&mut self, target: Vec2) {
        self.angle = aim(self.pos, target);
    }
}

/// Facing angle from `launcher` toward `target`
///
/// `target == launcher` gives atan2(0, 0) = 0.
#[inline]
pub fn aim(launcher: Vec2, target: Vec2) -> f32 {
    angle_between(launcher, target)
}
