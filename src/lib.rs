//! Orbital Match - a color-matching orbit shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (orbits, aim, projectiles, collisions)
//! - `session`: Title/Playing/Win/GameOver state machine and snapshots
//! - `difficulty`: Difficulty presets
//! - `tuning`: Data-driven game balance

pub mod difficulty;
pub mod session;
pub mod sim;
pub mod tuning;

pub use difficulty::{Difficulty, DifficultyParams};
pub use session::{GamePhase, Session, TickOutcome, WorldSnapshot};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Orb sprite extent (square box edge length)
    pub const ORB_SIZE: f32 = 30.0;
    /// Projectile sprite extent (square box edge length)
    pub const PROJECTILE_SIZE: f32 = 20.0;
    /// Projectile travel per tick
    pub const PROJECTILE_SPEED: f32 = 15.0;

    /// Orbit radius bands, assigned by orb index modulo band count
    pub const ORBIT_BANDS: [f32; 3] = [200.0, 250.0, 300.0];
    /// Base orb angular speed (radians per tick, before speed modifier)
    pub const ORB_BASE_ANGULAR_SPEED: f32 = 0.005;
    /// Per-orb random jitter applied to the base angular speed (±)
    pub const ORB_ANGULAR_JITTER: f32 = 0.001;

    /// Lives at session start
    pub const STARTING_LIVES: u8 = 3;
    /// Points for a color match before the combo multiplier
    pub const MATCH_POINTS: u64 = 100;
    /// Matches needed per +1 score multiplier
    pub const COMBO_STEP: u32 = 5;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of the vector from `from` to `to` (radians, atan2 convention)
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
