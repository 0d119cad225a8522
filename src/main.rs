//! Brick Breaker entry point
//!
//! Runs a headless session on the reference arcade host with the autopilot
//! at the controls.
//!
//! Usage: `brick-breaker [tuning.json|-] [frames] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::sim::{EnginePort, GameState, create_scene, step};
    use brick_breaker::{ArcadeWorld, Autopilot, Settings, Tuning};

    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tuning = match args.first().map(String::as_str) {
        None | Some("-") => Tuning::default(),
        Some(path) => Tuning::load(path).unwrap_or_else(|e| {
            log::warn!("{}; using default tuning", e);
            Tuning::default()
        }),
    };
    let frames: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(60 * 60 * 3);
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(7);

    let settings = Settings::load(Settings::FILE_NAME);
    let mut world = ArcadeWorld::new(&tuning, settings);
    let mut state = GameState::new(&tuning);
    create_scene(&state, &tuning, &mut world);

    let mut pilot = Autopilot::new(seed, 40.0);
    let dt = tuning.timing.frame_ms / 1000.0;
    let mut events = Vec::new();

    for _ in 0..frames {
        let input = pilot.input(state.phase, world.ball_position(), world.paddle_position());
        step(&mut state, &input, events.drain(..), &tuning, &mut world);
        events = world.step(dt);
    }

    println!(
        "{} frames: score {}, lives {}, cleared {}, game overs {}",
        frames, state.hud.score, state.hud.lives, state.hud.cleared, state.game_overs
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is driven by the embedding host
}
