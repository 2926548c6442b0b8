//! Fixed timestep simulation tick
//!
//! Core game loop that advances one session by exactly one frame.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::find_contacts;
use super::state::{GameEvent, GameState, LifeLossCause};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Pointer position in screen coordinates; `None` keeps the current aim
    pub pointer: Option<Vec2>,
    /// Fire a projectile this tick
    pub fire: bool,
}

impl TickInput {
    pub fn aim(pointer: Vec2) -> Self {
        Self {
            pointer: Some(pointer),
            fire: false,
        }
    }

    pub fn fire_at(pointer: Vec2) -> Self {
        Self {
            pointer: Some(pointer),
            fire: true,
        }
    }
}

/// How the session stands after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickVerdict {
    Continue,
    /// Every orb destroyed
    Won,
    /// Out of lives
    Lost,
}

/// Advance the game state by one fixed timestep
///
/// Order: orbs, aim, projectiles, firing, bounds exits, orb collisions,
/// verdict. Win is checked before loss.
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> TickVerdict {
    state.ticks += 1;

    let speed_modifier = state.params.speed_modifier;
    for orb in &mut state.orbs {
        orb.advance(speed_modifier);
    }

    if let Some(target) = input.pointer {
        state.launcher.aim_at(target);
    }

    for projectile in &mut state.projectiles {
        projectile.advance();
    }

    if input.fire {
        fire(state, rng, events);
    }

    remove_escaped_projectiles(state, events);
    resolve_contacts(state, rng, events);

    if state.orbs.is_empty() {
        state.next_color = None;
    }

    verdict(state, events)
}

/// Spawn a projectile of the queued color along the launcher's facing
///
/// Returns false (no-op) when nothing is queued or no orbs remain.
pub fn fire<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> bool {
    let Some(color) = state.next_color else {
        log::debug!("Fire ignored: no color queued");
        return false;
    };
    if state.orbs.is_empty() {
        log::debug!("Fire ignored: no orbs left");
        return false;
    }

    let origin = state.launcher.pos;
    let angle = state.launcher.angle;
    state.add_projectile(color, origin, angle);
    state.redraw_next_color(rng);
    events.push(GameEvent::ProjectileFired { color, angle });
    true
}

/// Bounds pass: every projectile fully off screen costs a life
fn remove_escaped_projectiles(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let bounds = state.tuning.bounds();
    let size = state.tuning.projectile_size;

    let escaped: Vec<u32> = state
        .projectiles
        .iter()
        .filter(|p| p.is_out_of_bounds(&bounds, size))
        .map(|p| p.id)
        .collect();
    if escaped.is_empty() {
        return;
    }

    state.projectiles.retain(|p| !escaped.contains(&p.id));
    for _ in &escaped {
        lose_life(state, LifeLossCause::Miss, events);
    }
}

/// Collision pass: resolve every projectile/orb overlap in id order
///
/// Pairs are taken from the world as it stands before resolution. Every pair
/// resolves, even when an earlier pair already spent its projectile or
/// destroyed its orb, and every projectile with a contact is removed.
fn resolve_contacts<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let contacts = find_contacts(
        &state.projectiles,
        &state.orbs,
        state.tuning.center(),
        state.tuning.projectile_size,
        state.tuning.orb_size,
    );
    if contacts.is_empty() {
        return;
    }

    let mut spent: Vec<u32> = Vec::new();
    for contact in contacts {
        if contact.projectile_color == contact.orb_color {
            state.orbs.retain(|o| o.id != contact.orb_id);
            state.combo += 1;
            let points = match_points(state.tuning.match_points, state.combo, state.tuning.combo_step);
            state.score = state.score.saturating_add(points);
            state.redraw_next_color(rng);

            log::debug!(
                "Orb {} ({}) destroyed: +{} (combo {})",
                contact.orb_id,
                contact.orb_color.as_str(),
                points,
                state.combo
            );
            events.push(GameEvent::OrbDestroyed {
                color: contact.orb_color,
                pos: contact.orb_pos,
                combo: state.combo,
                points,
            });
        } else {
            lose_life(state, LifeLossCause::Mismatch, events);
        }

        if !spent.contains(&contact.projectile_id) {
            spent.push(contact.projectile_id);
        }
    }

    state.projectiles.retain(|p| !spent.contains(&p.id));
}

/// Points for a match given the combo count after incrementing it
#[inline]
pub fn match_points(base: u64, combo: u32, combo_step: u32) -> u64 {
    let multiplier = 1 + u64::from(combo / combo_step.max(1));
    base.saturating_mul(multiplier)
}

fn lose_life(state: &mut GameState, cause: LifeLossCause, events: &mut Vec<GameEvent>) {
    if state.lives == 0 {
        log::trace!("Life loss clamped at zero ({:?})", cause);
    }
    state.lives = state.lives.saturating_sub(1);
    log::debug!("Life lost ({:?}), {} left", cause, state.lives);
    events.push(GameEvent::LifeLost {
        cause,
        lives_left: state.lives,
    });

    if state.combo > 0 {
        events.push(GameEvent::ComboBroken { combo: state.combo });
    }
    state.combo = 0;
}

fn verdict(state: &GameState, events: &mut Vec<GameEvent>) -> TickVerdict {
    if state.orbs.is_empty() {
        events.push(GameEvent::SessionWon { score: state.score });
        TickVerdict::Won
    } else if state.lives == 0 {
        events.push(GameEvent::SessionLost { score: state.score });
        TickVerdict::Lost
    } else {
        TickVerdict::Continue
    }
}
