//! Straight-line projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::state::OrbColor;

/// A colored shot fired from the launcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub color: OrbColor,
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
}

impl Projectile {
    pub fn spawn(id: u32, origin: Vec2, color: OrbColor, angle: f32, speed: f32) -> Self {
        Self {
            id,
            color,
            pos: origin,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Collision box for a sprite of edge length `size`
    #[inline]
    pub fn aabb(&self, size: f32) -> Aabb {
        Aabb::centered(self.pos, size)
    }

    /// True once the whole projectile box has left `bounds`
    pub fn is_out_of_bounds(&self, bounds: &Aabb, size: f32) -> bool {
        self.aabb(size).is_outside(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn bounds() -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(1000.0, 700.0))
    }

    #[test]
    fn test_spawn_velocity() {
        let p = Projectile::spawn(1, Vec2::new(500.0, 350.0), OrbColor::Red, FRAC_PI_2, 15.0);
        assert!(p.vel.x.abs() < 1e-5);
        assert!((p.vel.y - 15.0).abs() < 1e-5);
        assert_eq!(p.pos, Vec2::new(500.0, 350.0));
    }

    #[test]
    fn test_advance_is_linear() {
        let mut p = Projectile::spawn(1, Vec2::new(500.0, 350.0), OrbColor::Blue, 0.0, 15.0);
        for _ in 0..4 {
            p.advance();
        }
        assert!((p.pos.x - 560.0).abs() < 1e-4);
        assert!((p.pos.y - 350.0).abs() < 1e-4);
    }

    #[test]
    fn test_out_of_bounds_requires_full_exit() {
        let mut p = Projectile::spawn(1, Vec2::new(1005.0, 350.0), OrbColor::Red, 0.0, 15.0);
        // Half the box still overlaps the screen
        assert!(!p.is_out_of_bounds(&bounds(), 20.0));
        p.pos.x = 1010.0;
        assert!(!p.is_out_of_bounds(&bounds(), 20.0));
        p.pos.x = 1010.5;
        assert!(p.is_out_of_bounds(&bounds(), 20.0));
    }

    #[test]
    fn test_out_of_bounds_any_axis() {
        let b = bounds();
        let at = |x: f32, y: f32| Projectile::spawn(1, Vec2::new(x, y), OrbColor::Red, 0.0, 0.0);
        assert!(at(-11.0, 350.0).is_out_of_bounds(&b, 20.0));
        assert!(at(500.0, -11.0).is_out_of_bounds(&b, 20.0));
        assert!(at(500.0, 711.0).is_out_of_bounds(&b, 20.0));
        assert!(!at(500.0, 350.0).is_out_of_bounds(&b, 20.0));
    }
}
