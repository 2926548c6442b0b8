//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call = one frame)
//! - Injected RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod aim;
pub mod collision;
pub mod orbit;
pub mod projectile;
pub mod state;
pub mod tick;

pub use aim::{Launcher, aim};
pub use collision::{Aabb, Contact, find_contacts};
pub use orbit::{Orb, generate_orbs};
pub use projectile::Projectile;
pub use state::{GameEvent, GameState, LifeLossCause, OrbColor, PALETTE};
pub use tick::{TickInput, TickVerdict, fire, match_points, tick};
