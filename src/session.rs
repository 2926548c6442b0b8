//! Session state machine
//!
//! `Title → Playing → Win | GameOver → Title`, forever. The presentation layer
//! drives it with three calls: pick a difficulty, tick once per frame, and
//! acknowledge the end screen. Every call returns a [`WorldSnapshot`] to draw.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::difficulty::{Difficulty, DifficultyParams};
use crate::sim::{GameEvent, GameState, OrbColor, TickInput, TickVerdict, tick};
use crate::tuning::Tuning;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a difficulty selection
    Title,
    /// Active gameplay
    Playing,
    /// Every orb destroyed
    Win,
    /// Out of lives
    GameOver,
}

/// Render-ready view of one orb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbView {
    pub id: u32,
    pub color: OrbColor,
    pub rgb: [u8; 3],
    pub pos: Vec2,
    pub radius: f32,
    pub angle: f32,
}

/// Render-ready view of one projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub color: OrbColor,
    pub rgb: [u8; 3],
    pub pos: Vec2,
}

/// Everything the presentation layer needs to draw a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub state: GamePhase,
    pub difficulty: Option<Difficulty>,
    pub orbs: Vec<OrbView>,
    pub projectiles: Vec<ProjectileView>,
    pub launcher_position: Vec2,
    pub launcher_angle: f32,
    pub score: u64,
    pub lives: u8,
    pub combo: u32,
    pub next_color: Option<OrbColor>,
    pub ticks: u64,
}

impl WorldSnapshot {
    fn title(tuning: &Tuning) -> Self {
        Self {
            state: GamePhase::Title,
            difficulty: None,
            orbs: Vec::new(),
            projectiles: Vec::new(),
            launcher_position: tuning.center(),
            launcher_angle: 0.0,
            score: 0,
            lives: tuning.starting_lives,
            combo: 0,
            next_color: None,
            ticks: 0,
        }
    }

    fn of_world(state: GamePhase, difficulty: Option<Difficulty>, world: &GameState) -> Self {
        let center = world.tuning.center();
        Self {
            state,
            difficulty,
            orbs: world
                .orbs
                .iter()
                .map(|o| OrbView {
                    id: o.id,
                    color: o.color,
                    rgb: o.color.rgb(),
                    pos: o.position(center),
                    radius: o.radius,
                    angle: o.angle,
                })
                .collect(),
            projectiles: world
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    id: p.id,
                    color: p.color,
                    rgb: p.color.rgb(),
                    pos: p.pos,
                })
                .collect(),
            launcher_position: world.launcher.pos,
            launcher_angle: world.launcher.angle,
            score: world.score,
            lives: world.lives,
            combo: world.combo,
            next_color: world.next_color,
            ticks: world.ticks,
        }
    }
}

/// Result of one [`Session::tick`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub snapshot: WorldSnapshot,
    pub events: Vec<GameEvent>,
}

/// Phase plus the world it owns. A finished world stays readable for the
/// end screen until acknowledged.
#[derive(Debug, Clone)]
enum Stage {
    Title,
    Playing(GameState),
    Won(GameState),
    Lost(GameState),
}

/// One player's run of sessions
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    /// Seed `rng` was built from; `None` for a caller-supplied generator
    seed: Option<u64>,
    rng: Pcg32,
    stage: Stage,
    difficulty: Option<Difficulty>,
}

impl Session {
    /// New session at the title screen with a seeded RNG
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
        }
    }

    /// New session with default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Tuning::default(), seed)
    }

    /// New session driven by a caller-supplied generator
    pub fn with_rng(tuning: Tuning, rng: Pcg32) -> Self {
        Self {
            tuning,
            seed: None,
            rng,
            stage: Stage::Title,
            difficulty: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        match self.stage {
            Stage::Title => GamePhase::Title,
            Stage::Playing(_) => GamePhase::Playing,
            Stage::Won(_) => GamePhase::Win,
            Stage::Lost(_) => GamePhase::GameOver,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Current world (`None` on the title screen)
    pub fn world(&self) -> Option<&GameState> {
        match &self.stage {
            Stage::Title => None,
            Stage::Playing(w) | Stage::Won(w) | Stage::Lost(w) => Some(w),
        }
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        match self.world() {
            Some(world) => WorldSnapshot::of_world(self.phase(), self.difficulty, world),
            None => WorldSnapshot::title(&self.tuning),
        }
    }

    /// Title → Playing with a preset difficulty
    pub fn start_session(&mut self, difficulty: Difficulty) -> WorldSnapshot {
        self.start(Some(difficulty), difficulty.params())
    }

    /// Title → Playing with custom parameters
    pub fn start_session_with(&mut self, params: DifficultyParams) -> WorldSnapshot {
        self.start(None, params)
    }

    /// Title → Playing with a hand-built world (scripted layouts)
    pub fn start_with_world(&mut self, world: GameState) -> WorldSnapshot {
        if !self.accepts_start() {
            return self.snapshot();
        }
        log::info!("Session started from prepared world ({} orbs)", world.orbs.len());
        self.difficulty = None;
        self.stage = Stage::Playing(world);
        self.snapshot()
    }

    fn start(&mut self, difficulty: Option<Difficulty>, params: DifficultyParams) -> WorldSnapshot {
        if !self.accepts_start() {
            return self.snapshot();
        }
        let world = GameState::new(params, self.tuning.clone(), &mut self.rng);
        match difficulty {
            Some(d) => log::info!(
                "Session started: {} (seed {:?}, {} orbs)",
                d,
                self.seed,
                world.orbs.len()
            ),
            None => log::info!(
                "Session started: custom {:?} (seed {:?})",
                params,
                self.seed
            ),
        }
        self.difficulty = difficulty;
        self.stage = Stage::Playing(world);
        self.snapshot()
    }

    fn accepts_start(&self) -> bool {
        if matches!(self.stage, Stage::Title) {
            true
        } else {
            log::warn!("Difficulty selection ignored in {:?}", self.phase());
            false
        }
    }

    /// Advance one frame; a no-op outside `Playing`
    pub fn tick(&mut self, input: &TickInput) -> TickOutcome {
        let mut events = Vec::new();

        let Stage::Playing(world) = &mut self.stage else {
            if input.fire {
                log::warn!("Fire ignored in {:?}", self.phase());
            }
            return TickOutcome {
                snapshot: self.snapshot(),
                events,
            };
        };

        match tick(world, input, &mut self.rng, &mut events) {
            TickVerdict::Continue => {}
            TickVerdict::Won => {
                log::info!("Level complete! Score {}", world.score);
                self.finish(true);
            }
            TickVerdict::Lost => {
                log::info!("Game over. Score {}", world.score);
                self.finish(false);
            }
        }

        TickOutcome {
            snapshot: self.snapshot(),
            events,
        }
    }

    fn finish(&mut self, won: bool) {
        if let Stage::Playing(world) = std::mem::replace(&mut self.stage, Stage::Title) {
            self.stage = if won {
                Stage::Won(world)
            } else {
                Stage::Lost(world)
            };
        }
    }

    /// Win/GameOver → Title; nothing carries over
    pub fn acknowledge_end(&mut self) -> WorldSnapshot {
        match self.stage {
            Stage::Won(_) | Stage::Lost(_) => {
                log::info!("End screen acknowledged, back to title");
                self.stage = Stage::Title;
                self.difficulty = None;
            }
            _ => log::warn!("Acknowledge ignored in {:?}", self.phase()),
        }
        self.snapshot()
    }
}
