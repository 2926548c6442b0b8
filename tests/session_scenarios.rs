use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use orbital_match::sim::{GameEvent, GameState, LifeLossCause, OrbColor, TickInput};
use orbital_match::{Difficulty, DifficultyParams, GamePhase, Session, Tuning};

const CENTER: Vec2 = Vec2::new(500.0, 350.0);
const RIGHT_EDGE: Vec2 = Vec2::new(1000.0, 350.0);

fn world() -> GameState {
    GameState::empty(DifficultyParams::new(1.0, 0, 3), Tuning::default())
}

/// Tick with no input until no projectile is in flight
fn drain_projectiles(session: &mut Session, limit: usize) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..limit {
        let out = session.tick(&TickInput::default());
        events.extend(out.events);
        if out.snapshot.projectiles.is_empty() || out.snapshot.state != GamePhase::Playing {
            break;
        }
    }
    events
}

#[test]
fn easy_start_then_idle_tick() {
    let mut session = Session::with_seed(77);
    let start = session.start_session(Difficulty::Easy);
    let speeds: Vec<f32> = session
        .world()
        .expect("playing")
        .orbs
        .iter()
        .map(|o| o.angular_speed)
        .collect();

    let out = session.tick(&TickInput::default());
    let snap = out.snapshot;

    assert!(out.events.is_empty());
    assert_eq!(snap.state, GamePhase::Playing);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.lives, 3);
    assert_eq!(snap.combo, 0);
    assert_eq!(snap.ticks, 1);
    assert_eq!(snap.orbs.len(), start.orbs.len());
    for ((before, after), speed) in start.orbs.iter().zip(&snap.orbs).zip(speeds) {
        assert_eq!(before.id, after.id);
        assert!((after.angle - (before.angle + speed * 1.2)).abs() < 1e-6);
    }
}

#[test]
fn orbit_angle_after_many_ticks() {
    let mut session = Session::with_seed(5);
    let start = session.start_session(Difficulty::Hard);
    let speeds: Vec<f32> = session
        .world()
        .expect("playing")
        .orbs
        .iter()
        .map(|o| o.angular_speed)
        .collect();

    let n = 240;
    let mut snap = start.clone();
    for _ in 0..n {
        snap = session.tick(&TickInput::default()).snapshot;
    }

    for ((before, after), speed) in start.orbs.iter().zip(&snap.orbs).zip(speeds) {
        let expected = before.angle + n as f32 * speed * 3.0;
        assert!((after.angle - expected).abs() < 1e-3);
        // Position agrees with the closed form
        let pos = CENTER + Vec2::new(expected.cos(), expected.sin()) * before.radius;
        assert!((after.pos - pos).length() < 0.5);
    }
}

#[test]
fn red_shot_clears_red_orb() {
    let mut w = world();
    // Red orb on the launcher so the fresh shot overlaps it immediately
    w.add_orb(OrbColor::Red, 0.0, 0.0, 0.0);
    w.add_orb(OrbColor::Blue, 250.0, 1.0, 0.0);
    w.next_color = Some(OrbColor::Red);

    let mut session = Session::with_seed(9);
    session.start_with_world(w);
    let out = session.tick(&TickInput::fire_at(RIGHT_EDGE));
    let snap = out.snapshot;

    assert_eq!(snap.score, 100);
    assert_eq!(snap.combo, 1);
    assert_eq!(snap.lives, 3);
    assert_eq!(snap.orbs.len(), 1);
    assert_eq!(snap.orbs[0].color, OrbColor::Blue);
    assert_eq!(snap.next_color, Some(OrbColor::Blue));
    assert!(snap.projectiles.is_empty());
    assert!(matches!(out.events[0], GameEvent::ProjectileFired { color: OrbColor::Red, .. }));
    assert!(matches!(
        out.events[1],
        GameEvent::OrbDestroyed { color: OrbColor::Red, combo: 1, points: 100, .. }
    ));
}

#[test]
fn wrong_color_costs_a_life() {
    let mut w = world();
    w.add_orb(OrbColor::Blue, 0.0, 0.0, 0.0);
    w.next_color = Some(OrbColor::Red);

    let mut session = Session::with_seed(9);
    session.start_with_world(w);
    let snap = session.tick(&TickInput::fire_at(RIGHT_EDGE)).snapshot;

    assert_eq!(snap.lives, 2);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.orbs.len(), 1);
    assert!(snap.projectiles.is_empty());
    assert_eq!(snap.next_color, Some(OrbColor::Blue));
}

#[test]
fn shot_leaving_screen_costs_a_life() {
    let mut w = world();
    // Below the launcher, clear of a shot fired to the right
    w.add_orb(OrbColor::Blue, 250.0, FRAC_PI_2, 0.0);
    w.next_color = Some(OrbColor::Blue);
    w.combo = 2;
    w.score = 300;

    let mut session = Session::with_seed(9);
    session.start_with_world(w);
    let fired = session.tick(&TickInput::fire_at(RIGHT_EDGE));
    assert_eq!(fired.snapshot.projectiles.len(), 1);

    let events = drain_projectiles(&mut session, 100);
    let snap = session.snapshot();

    assert_eq!(snap.lives, 2);
    assert_eq!(snap.combo, 0);
    assert_eq!(snap.score, 300);
    assert_eq!(snap.state, GamePhase::Playing);
    assert_eq!(
        events,
        vec![
            GameEvent::LifeLost { cause: LifeLossCause::Miss, lives_left: 2 },
            GameEvent::ComboBroken { combo: 2 },
        ]
    );
    // 500 → past 1010 at 15px per tick
    assert_eq!(snap.ticks, 36);
}

#[test]
fn running_out_of_lives_ends_the_game() {
    let mut w = world();
    w.add_orb(OrbColor::Blue, 250.0, FRAC_PI_2, 0.0);
    w.next_color = Some(OrbColor::Blue);

    let mut session = Session::with_seed(9);
    session.start_with_world(w);
    for _ in 0..3 {
        session.tick(&TickInput::fire_at(RIGHT_EDGE));
    }

    let events = drain_projectiles(&mut session, 100);
    let snap = session.snapshot();
    assert_eq!(snap.state, GamePhase::GameOver);
    assert_eq!(snap.lives, 0);
    assert_eq!(events.last(), Some(&GameEvent::SessionLost { score: 0 }));

    // Frozen until acknowledged
    let out = session.tick(&TickInput::fire_at(RIGHT_EDGE));
    assert!(out.events.is_empty());
    assert_eq!(out.snapshot.state, GamePhase::GameOver);

    assert_eq!(session.acknowledge_end().state, GamePhase::Title);
}

#[test]
fn zero_orb_session_wins_on_first_tick() {
    let mut session = Session::with_seed(3);
    let start = session.start_session_with(DifficultyParams::new(1.0, 0, 3));
    assert!(start.orbs.is_empty());
    assert!(start.next_color.is_some());

    let out = session.tick(&TickInput::fire_at(RIGHT_EDGE));
    assert_eq!(out.snapshot.state, GamePhase::Win);
    assert_eq!(out.snapshot.next_color, None);
    assert!(out.snapshot.projectiles.is_empty());
    assert_eq!(out.events, vec![GameEvent::SessionWon { score: 0 }]);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut session = Session::with_seed(11);
    session.start_session(Difficulty::Medium);
    let out = session.tick(&TickInput::fire_at(RIGHT_EDGE));

    let json = serde_json::to_value(&out).expect("serializable");
    assert_eq!(json["snapshot"]["state"], "Playing");
    assert_eq!(json["snapshot"]["orbs"].as_array().map(|a| a.len()), Some(25));
    assert_eq!(json["events"][0]["event"], "projectile_fired");
    let orb = &json["snapshot"]["orbs"][0];
    let color: OrbColor = serde_json::from_value(orb["color"].clone()).expect("color");
    let rgb: [u8; 3] = serde_json::from_value(orb["rgb"].clone()).expect("rgb triple");
    assert_eq!(rgb, color.rgb());
}
