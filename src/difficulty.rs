//! Difficulty presets
//!
//! Each preset maps to an immutable [`DifficultyParams`] handed to the session
//! when a run starts.

use serde::{Deserialize, Serialize};

use crate::sim::state::PALETTE;

/// Difficulty selection from the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Planet the title screen names this difficulty after
    pub fn planet(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Earth",
            Difficulty::Medium => "Mars",
            Difficulty::Hard => "Neptune",
        }
    }

    /// Parse from a preset or planet name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "earth" => Some(Difficulty::Easy),
            "medium" | "med" | "mars" => Some(Difficulty::Medium),
            "hard" | "neptune" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Simulation parameters for this preset
    pub fn params(&self) -> DifficultyParams {
        match self {
            Difficulty::Easy => DifficultyParams::new(1.2, 15, 3),
            Difficulty::Medium => DifficultyParams::new(1.7, 25, 4),
            Difficulty::Hard => DifficultyParams::new(3.0, 40, 5),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.planet(), self.as_str())
    }
}

/// Parameters that shape one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// Multiplier applied to every orb's angular speed
    pub speed_modifier: f32,
    /// Orbs generated at session start
    pub orb_count: usize,
    /// How many leading palette colors orbs are drawn from (1..=6)
    pub available_colors: usize,
}

impl DifficultyParams {
    pub fn new(speed_modifier: f32, orb_count: usize, available_colors: usize) -> Self {
        Self {
            speed_modifier,
            orb_count,
            available_colors: available_colors.clamp(1, PALETTE.len()),
        }
    }
}

impl Default for DifficultyParams {
    fn default() -> Self {
        Difficulty::default().params()
    }
}
