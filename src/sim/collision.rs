//! Collision detection
//!
//! Orbs and projectiles collide as axis-aligned boxes matching their sprite
//! extents. Overlap is strict: boxes that only share an edge do not touch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::orbit::Orb;
use super::projectile::Projectile;
use super::state::OrbColor;

/// Axis-aligned box (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square box of edge `size` centered on `center`
    pub fn centered(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Boxes share interior area
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Box lies entirely past one of `bounds`' edges
    #[inline]
    pub fn is_outside(&self, bounds: &Aabb) -> bool {
        self.min.x > bounds.max.x
            || self.max.x < bounds.min.x
            || self.min.y > bounds.max.y
            || self.max.y < bounds.min.y
    }
}

/// A projectile/orb pair whose boxes overlap this tick
///
/// Colors and the orb position are captured when the pair is found, so a
/// pair still resolves after an earlier pair removed its orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub projectile_id: u32,
    pub projectile_color: OrbColor,
    pub orb_id: u32,
    pub orb_color: OrbColor,
    pub orb_pos: Vec2,
}

/// All overlapping pairs, ordered by projectile then orb (slice order)
pub fn find_contacts(
    projectiles: &[Projectile],
    orbs: &[Orb],
    center: Vec2,
    projectile_size: f32,
    orb_size: f32,
) -> Vec<Contact> {
    let orb_boxes: Vec<(&Orb, Vec2, Aabb)> = orbs
        .iter()
        .map(|o| {
            let pos = o.position(center);
            (o, pos, Aabb::centered(pos, orb_size))
        })
        .collect();

    let mut contacts = Vec::new();
    for projectile in projectiles {
        let shot = projectile.aabb(projectile_size);
        for &(orb, orb_pos, orb_box) in &orb_boxes {
            if shot.overlaps(&orb_box) {
                contacts.push(Contact {
                    projectile_id: projectile.id,
                    projectile_color: projectile.color,
                    orb_id: orb.id,
                    orb_color: orb.color,
                    orb_pos,
                });
            }
        }
    }
    contacts
}
