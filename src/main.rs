//! Orbital Match headless driver
//!
//! Plays one session with a lead-the-target autopilot and prints the final
//! world. Useful for balance checks and replaying a seed.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result, anyhow};
    use clap::Parser;
    use glam::Vec2;

    use orbital_match::sim::{GameEvent, GameState, TickInput};
    use orbital_match::{Difficulty, GamePhase, Session, Tuning};

    #[derive(Debug, Parser)]
    #[command(name = "orbital-match", about = "Run one Orbital Match session headless")]
    struct Args {
        /// easy|medium|hard (or earth|mars|neptune)
        #[arg(long, default_value = "easy")]
        difficulty: String,

        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many ticks even if the session is still running
        #[arg(long, default_value_t = 60 * 60 * 5)]
        max_ticks: u64,

        /// JSON tuning overrides
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    }

    /// Where to point so a shot fired now meets an orb of the loaded color
    fn pick_target(world: &GameState) -> Option<Vec2> {
        let color = world.next_color?;
        let center = world.tuning.center();
        let speed = world.tuning.projectile_speed;
        let modifier = world.params.speed_modifier;

        world
            .orbs
            .iter()
            .filter(|o| o.color == color)
            .min_by(|a, b| a.radius.total_cmp(&b.radius))
            .map(|orb| {
                let flight_ticks = orb.radius / speed;
                let angle = orb.angle + orb.angular_speed * modifier * flight_ticks;
                center + Vec2::new(angle.cos(), angle.sin()) * orb.radius
            })
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let difficulty = Difficulty::from_str(&args.difficulty)
            .ok_or_else(|| anyhow!("unknown difficulty `{}`", args.difficulty))?;
        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)
                .with_context(|| format!("loading tuning from {}", path.display()))?,
            None => Tuning::default(),
        };
        let seed = args.seed.unwrap_or_else(rand::random);

        log::info!("Orbital Match (headless) seed {}", seed);
        let mut session = Session::new(tuning, seed);
        session.start_session(difficulty);

        let mut ticks = 0;
        while session.phase() == GamePhase::Playing && ticks < args.max_ticks {
            let input = match session.world() {
                Some(world) if world.projectiles.is_empty() => {
                    pick_target(world).map(TickInput::fire_at).unwrap_or_default()
                }
                _ => TickInput::default(),
            };

            let out = session.tick(&input);
            for event in &out.events {
                match event {
                    GameEvent::ProjectileFired { .. } => log::trace!("{:?}", event),
                    _ => log::debug!("tick {}: {:?}", out.snapshot.ticks, event),
                }
            }
            ticks += 1;
        }

        let snap = session.snapshot();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&snap)?);
        } else {
            println!(
                "{}: {:?} after {} ticks, score {}, lives {}, {} orbs left",
                difficulty,
                snap.state,
                snap.ticks,
                snap.score,
                snap.lives,
                snap.orbs.len()
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page on the web
}
