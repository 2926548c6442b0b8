//! Game state and core simulation types
//!
//! Everything a running session mutates lives in [`GameState`].

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::aim::Launcher;
use super::orbit::{Orb, generate_orbs};
use super::projectile::Projectile;
use crate::difficulty::DifficultyParams;
use crate::tuning::Tuning;

/// Orb/projectile colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrbColor {
    Green,
    Red,
    Blue,
    Yellow,
    Cyan,
    Orange,
}

/// Fixed palette; difficulties use a prefix of it
pub const PALETTE: [OrbColor; 6] = [
    OrbColor::Green,
    OrbColor::Red,
    OrbColor::Blue,
    OrbColor::Yellow,
    OrbColor::Cyan,
    OrbColor::Orange,
];

impl OrbColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrbColor::Green => "green",
            OrbColor::Red => "red",
            OrbColor::Blue => "blue",
            OrbColor::Yellow => "yellow",
            OrbColor::Cyan => "cyan",
            OrbColor::Orange => "orange",
        }
    }

    /// Display color for the presentation layer
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            OrbColor::Green => [34, 197, 94],
            OrbColor::Red => [248, 113, 113],
            OrbColor::Blue => [59, 130, 246],
            OrbColor::Yellow => [253, 224, 71],
            OrbColor::Cyan => [0, 255, 255],
            OrbColor::Orange => [255, 165, 0],
        }
    }
}

/// Why a life was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeLossCause {
    /// Projectile left the screen without hitting anything
    Miss,
    /// Projectile hit an orb of another color
    Mismatch,
}

/// Discrete things that happened during a tick (sound/UI hooks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    ProjectileFired {
        color: OrbColor,
        angle: f32,
    },
    OrbDestroyed {
        color: OrbColor,
        pos: Vec2,
        /// Combo count after this match
        combo: u32,
        points: u64,
    },
    LifeLost {
        cause: LifeLossCause,
        lives_left: u8,
    },
    /// A non-zero combo was reset
    ComboBroken {
        combo: u32,
    },
    SessionWon {
        score: u64,
    },
    SessionLost {
        score: u64,
    },
}

/// Complete world state of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub params: DifficultyParams,
    pub tuning: Tuning,
    pub launcher: Launcher,
    /// Live orbs (creation order)
    pub orbs: Vec<Orb>,
    /// Live projectiles (creation order)
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    pub lives: u8,
    pub combo: u32,
    /// Color of the next shot; `None` only when no orbs remain
    pub next_color: Option<OrbColor>,
    /// Ticks simulated so far
    pub ticks: u64,
    next_id: u32,
}

impl GameState {
    /// Fresh session: generates the orb ring and seeds the first shot color
    pub fn new<R: Rng + ?Sized>(params: DifficultyParams, tuning: Tuning, rng: &mut R) -> Self {
        let mut state = Self::empty(params, tuning);

        generate_orbs(&mut state, rng);

        state.next_color = match state.orbs.choose(rng) {
            Some(orb) => Some(orb.color),
            None => {
                let colors = &PALETTE[..state.params.available_colors.clamp(1, PALETTE.len())];
                colors.choose(rng).copied()
            }
        };

        state
    }

    /// A world with no orbs or projectiles (for hand-built layouts)
    pub fn empty(params: DifficultyParams, tuning: Tuning) -> Self {
        let lives = tuning.starting_lives;
        let launcher = Launcher::new(tuning.center());
        Self {
            params,
            tuning,
            launcher,
            orbs: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            lives,
            combo: 0,
            next_color: None,
            ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place an orb on an orbit around the screen center
    pub fn add_orb(&mut self, color: OrbColor, radius: f32, angle: f32, angular_speed: f32) -> u32 {
        let id = self.next_entity_id();
        self.orbs.push(Orb {
            id,
            color,
            radius,
            angle,
            angular_speed,
        });
        id
    }

    /// Launch a projectile from `origin` along `angle`
    pub fn add_projectile(&mut self, color: OrbColor, origin: Vec2, angle: f32) -> u32 {
        let id = self.next_entity_id();
        let speed = self.tuning.projectile_speed;
        self.projectiles.push(Projectile::spawn(id, origin, color, angle, speed));
        id
    }

    /// Distinct colors among live orbs, in palette order
    pub fn live_colors(&self) -> Vec<OrbColor> {
        PALETTE
            .iter()
            .copied()
            .filter(|c| self.orbs.iter().any(|o| o.color == *c))
            .collect()
    }

    /// Redraw the next shot color uniformly from the distinct live colors
    pub fn redraw_next_color<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.next_color = self.live_colors().choose(rng).copied();
    }

    pub fn orb_position(&self, orb: &Orb) -> Vec2 {
        orb.position(self.tuning.center())
    }
}
