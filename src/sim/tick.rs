//! Per-frame update and event dispatch
//!
//! `tick` runs once per rendered frame; `handle_event` reacts to whatever the
//! host's physics reported since the previous frame. `step` does both in the
//! order a frame needs them.

use glam::Vec2;

use super::bricks::{BrickId, FadeStep};
use super::clock::DelayedAction;
use super::event::{HostEvent, TickInput};
use super::hud::Label;
use super::paddle::integrate;
use super::port::EnginePort;
use super::state::{GamePhase, GameState};
use crate::assets::{Animation, SoundEffect, SpriteKey};
use crate::tuning::{ScoringTuning, Tuning};

/// Ball launch vector for a given number of levels cleared
///
/// Grows exponentially: `base * speed_multiplier^times_cleared`.
pub fn launch_velocity(tuning: &Tuning, times_cleared: u32) -> Vec2 {
    let multiplier = if times_cleared > 0 {
        tuning.ball.speed_multiplier.powi(times_cleared as i32)
    } else {
        1.0
    };
    tuning.ball.launch_velocity * multiplier
}

/// Points awarded per brick for a given number of levels cleared
///
/// Grows linearly: `base_points * clear_multiplier * times_cleared`, with a
/// multiplier of 1 before the first clear. This deliberately does not follow
/// the launch speed's exponential law.
pub fn brick_points(scoring: &ScoringTuning, times_cleared: u32) -> u64 {
    let multiplier = if times_cleared > 0 {
        scoring.clear_multiplier.saturating_mul(times_cleared as u64)
    } else {
        1
    };
    scoring.base_points.saturating_mul(multiplier)
}

/// Ask the host to load every sprite and sound, then register animations
pub fn preload<H: EnginePort>(host: &mut H) {
    for sprite in SpriteKey::ALL {
        host.load_sprite(sprite);
    }
    for effect in SoundEffect::ALL {
        host.load_sound(effect);
    }
    for animation in Animation::ALL {
        host.create_animation(animation);
    }
}

/// Load assets, spawn every entity once and put the scene in its idle layout
pub fn create_scene<H: EnginePort>(state: &GameState, tuning: &Tuning, host: &mut H) {
    let layout = &tuning.layout;
    preload(host);

    host.create_ball(
        SpriteKey::Ball,
        layout.ball_rest_position(),
        layout.ball_size * 0.5,
        tuning.ball.max_velocity,
    );
    host.create_paddle(
        SpriteKey::Paddle,
        layout.paddle_spawn_position(),
        layout.paddle_size,
    );

    let size = state.bricks.brick_size();
    for brick in state.bricks.iter() {
        host.create_brick(SpriteKey::Brick, brick.id, brick.pos, size);
    }

    reset_positions(tuning, host);

    for label in Label::ALL {
        host.create_label(label, label.position(), &state.hud.text(label));
    }
    host.create_start_control(
        SpriteKey::Button,
        Vec2::new(layout.width * 0.5, layout.height * 0.5),
    );
    host.set_start_control(!state.is_playing());

    log::info!(
        "Scene created: {} bricks on a {}x{} canvas",
        state.bricks.len(),
        layout.width,
        layout.height
    );
}

/// Put the ball above the centre of the paddle and centre the paddle
///
/// The paddle keeps its vertical position. Calling this twice in a row
/// leaves everything where the first call put it.
pub fn reset_positions<H: EnginePort>(tuning: &Tuning, host: &mut H) {
    let layout = &tuning.layout;
    host.set_ball_position(layout.ball_rest_position());
    let paddle = host.paddle_position();
    host.set_paddle_position(Vec2::new(layout.width * 0.5, paddle.y));
}

/// Leave `Idle` and begin a fresh run. Returns false if already playing.
pub fn start_game<H: EnginePort>(state: &mut GameState, tuning: &Tuning, host: &mut H) -> bool {
    if state.is_playing() {
        return false;
    }

    host.set_start_control(false);
    state.phase = GamePhase::Playing;

    state.hud.score = 0;
    state.hud.lives = tuning.scoring.starting_lives;
    state.times_cleared = 0;
    state.hud.cleared = 0;
    sync_labels(state, host);

    host.set_ball_velocity(launch_velocity(tuning, state.times_cleared));
    reset_positions(tuning, host);

    log::info!("Game started with {} lives", state.hud.lives);
    true
}

/// Level clear sequence
///
/// Pauses physics, bumps the cleared counters, relaunches the ball faster,
/// then schedules physics to resume after the death delay and the bricks to
/// come back shortly after that. Neither timer is cancellable.
pub fn reset_level<H: EnginePort>(state: &mut GameState, tuning: &Tuning, host: &mut H) {
    pause_physics(state, host);

    state.hud.add_clear();
    set_label(state, Label::Cleared, host);
    state.times_cleared += 1;
    state.level_clears += 1;

    host.set_ball_velocity(launch_velocity(tuning, state.times_cleared));
    reset_positions(tuning, host);

    let timing = &tuning.timing;
    state.clock.schedule(
        timing.death_delay_ms + timing.repopulate_lag_ms,
        DelayedAction::RepopulateBricks,
    );
    state
        .clock
        .schedule(timing.death_delay_ms, DelayedAction::ResumePhysics);

    log::info!(
        "Level cleared ({} times), next launch speed {:.1}",
        state.times_cleared,
        launch_velocity(tuning, state.times_cleared).length()
    );
}

/// Back to `Idle`: start control shown, ball stopped
pub fn game_over<H: EnginePort>(state: &mut GameState, host: &mut H) {
    host.set_start_control(true);
    host.set_ball_velocity(Vec2::ZERO);
    state.phase = GamePhase::Idle;
    state.game_overs += 1;

    log::info!("Game over, final score {}", state.hud.score);
}

/// Dispatch one host event
pub fn handle_event<H: EnginePort>(
    state: &mut GameState,
    event: HostEvent,
    tuning: &Tuning,
    host: &mut H,
) {
    match event {
        HostEvent::BallHitPaddle => {
            host.play_sound(SoundEffect::PaddleHit);
            host.play_animation(Animation::Wobble);
        }
        HostEvent::BallHitBrick(id) => ball_hit_brick(state, id, tuning, host),
        HostEvent::WorldBounds(blocked) => {
            if blocked.down {
                ball_lost(state, tuning, host);
            }
        }
        HostEvent::StartClicked => {
            if !start_game(state, tuning, host) {
                log::debug!("Start control clicked while playing; ignored");
            }
        }
    }
}

/// Advance one frame
///
/// Integrates the paddle, checks the start keys, then advances the
/// simulation clock (which keeps running while physics is paused) to drive
/// brick fades and delayed actions.
pub fn tick<H: EnginePort>(state: &mut GameState, input: &TickInput, tuning: &Tuning, host: &mut H) {
    state.time_ticks += 1;

    state.paddle_velocity = integrate(state.paddle_velocity, input, &tuning.paddle);
    if state.is_playing() {
        host.set_paddle_velocity_x(state.paddle_velocity);
    } else {
        host.set_paddle_velocity_x(0.0);
    }

    if input.start_pressed() && !state.is_playing() {
        start_game(state, tuning, host);
    }

    let dt_ms = tuning.timing.frame_ms;
    advance_fades(state, dt_ms, host);
    for action in state.clock.advance(dt_ms) {
        run_delayed(state, action, host);
    }
}

/// Handle the events the host produced since the last frame, then tick
pub fn step<H: EnginePort>(
    state: &mut GameState,
    input: &TickInput,
    events: impl IntoIterator<Item = HostEvent>,
    tuning: &Tuning,
    host: &mut H,
) {
    for event in events {
        handle_event(state, event, tuning, host);
    }
    tick(state, input, tuning, host);
}

fn ball_hit_brick<H: EnginePort>(
    state: &mut GameState,
    id: BrickId,
    tuning: &Tuning,
    host: &mut H,
) {
    let Some(brick) = state.bricks.get_mut(id) else {
        log::warn!("Hit reported for unknown brick {:?}", id);
        return;
    };
    // The body is gone once hit; a second report in the same frame is stale
    if !brick.hit(tuning.timing.brick_vanish_ms) {
        log::debug!("Brick {:?} already disabled; hit ignored", id);
        return;
    }

    host.play_sound(SoundEffect::BrickHit);
    host.set_brick_body_enabled(id, false);

    let points = brick_points(&tuning.scoring, state.times_cleared);
    state.hud.add_points(points);
    set_label(state, Label::Score, host);

    let remaining = state.bricks.count_active();
    log::debug!("Brick {:?} hit for {} points, {} left", id, points, remaining);
    if remaining == 0 {
        reset_level(state, tuning, host);
    }
}

fn ball_lost<H: EnginePort>(state: &mut GameState, tuning: &Tuning, host: &mut H) {
    let out_of_lives = state.hud.remove_life();
    set_label(state, Label::Lives, host);
    log::debug!("Ball lost, {} lives left", state.hud.lives);

    reset_positions(tuning, host);
    pause_physics(state, host);
    state
        .clock
        .schedule(tuning.timing.death_delay_ms, DelayedAction::ResumePhysics);

    // Game over also replays the whole level clear sequence
    if out_of_lives {
        reset_level(state, tuning, host);
        game_over(state, host);
    }
}

fn run_delayed<H: EnginePort>(state: &mut GameState, action: DelayedAction, host: &mut H) {
    match action {
        DelayedAction::ResumePhysics => resume_physics(state, host),
        DelayedAction::RepopulateBricks => {
            state.bricks.restore_all();
            for brick in state.bricks.iter() {
                host.set_brick_body_enabled(brick.id, true);
                host.set_brick_visible(brick.id, true);
                host.set_brick_alpha(brick.id, 1.0);
            }
            log::debug!("Bricks repopulated");
        }
    }
}

fn advance_fades<H: EnginePort>(state: &mut GameState, dt_ms: f32, host: &mut H) {
    for brick in state.bricks.iter_mut() {
        match brick.advance_fade(dt_ms) {
            Some(FadeStep::Fading(alpha)) => host.set_brick_alpha(brick.id, alpha),
            Some(FadeStep::Finished) => {
                host.set_brick_alpha(brick.id, 0.0);
                host.set_brick_body_enabled(brick.id, false);
                host.set_brick_visible(brick.id, false);
            }
            None => {}
        }
    }
}

fn pause_physics<H: EnginePort>(state: &mut GameState, host: &mut H) {
    state.physics_paused = true;
    host.pause_physics();
}

fn resume_physics<H: EnginePort>(state: &mut GameState, host: &mut H) {
    state.physics_paused = false;
    host.resume_physics();
}

fn set_label<H: EnginePort>(state: &GameState, label: Label, host: &mut H) {
    host.set_label(label, &state.hud.text(label));
}

fn sync_labels<H: EnginePort>(state: &GameState, host: &mut H) {
    for label in Label::ALL {
        set_label(state, label, host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::event::Blocked;
    use crate::world::ArcadeWorld;

    fn setup() -> (GameState, Tuning, ArcadeWorld) {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning);
        let mut world = ArcadeWorld::new(&tuning, Settings::default());
        create_scene(&state, &tuning, &mut world);
        (state, tuning, world)
    }

    fn started() -> (GameState, Tuning, ArcadeWorld) {
        let (mut state, tuning, mut world) = setup();
        assert!(start_game(&mut state, &tuning, &mut world));
        (state, tuning, world)
    }

    fn press_enter() -> TickInput {
        TickInput {
            enter: true,
            ..Default::default()
        }
    }

    /// Hit every brick except the last `keep`, ids in order
    fn hit_all_but(state: &mut GameState, keep: usize, tuning: &Tuning, world: &mut ArcadeWorld) {
        let total = state.bricks.len();
        for i in 0..total - keep {
            handle_event(state, HostEvent::BallHitBrick(BrickId(i as u32)), tuning, world);
        }
    }

    fn run_ticks(state: &mut GameState, ticks: u32, tuning: &Tuning, world: &mut ArcadeWorld) {
        for _ in 0..ticks {
            tick(state, &TickInput::default(), tuning, world);
        }
    }

    #[test]
    fn test_scene_starts_idle() {
        let (state, tuning, world) = setup();
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(world.start_control_active());
        assert_eq!(world.ball_position(), tuning.layout.ball_rest_position());
        assert_eq!(world.ball_velocity(), Vec2::ZERO);
        assert_eq!(world.label_text(Label::Lives), Some("Lives: 3"));
        assert_eq!(world.brick_count(), 21);
        assert_eq!(world.brick(BrickId(0)).unwrap().sprite, SpriteKey::Brick);
    }

    #[test]
    fn test_scene_loads_assets_first() {
        let (mut state, tuning, mut world) = started();
        assert_eq!(world.loaded_assets(), SpriteKey::ALL.len() + SoundEffect::ALL.len());

        // Both sounds and the wobble are registered, so feedback reaches the host
        handle_event(&mut state, HostEvent::BallHitBrick(BrickId(0)), &tuning, &mut world);
        handle_event(&mut state, HostEvent::BallHitPaddle, &tuning, &mut world);
        assert_eq!(world.sounds().len(), 2);
        assert_eq!(world.animations(), &[Animation::Wobble]);
    }

    #[test]
    fn test_launch_speed_is_exponential() {
        let tuning = Tuning::default();
        let base = tuning.ball.launch_velocity;
        let r = tuning.ball.speed_multiplier;

        assert_eq!(launch_velocity(&tuning, 0), base);
        assert!((launch_velocity(&tuning, 1) - base * r).length() < 1e-3);
        assert!((launch_velocity(&tuning, 2) - base * r * r).length() < 1e-3);
    }

    #[test]
    fn test_brick_points_are_linear() {
        let scoring = ScoringTuning {
            base_points: 10,
            clear_multiplier: 2,
            starting_lives: 3,
        };
        assert_eq!(brick_points(&scoring, 0), 10);
        assert_eq!(brick_points(&scoring, 1), 20);
        assert_eq!(brick_points(&scoring, 2), 40);
        assert_eq!(brick_points(&scoring, 3), 60);
    }

    #[test]
    fn test_brick_points_saturate() {
        let scoring = ScoringTuning {
            base_points: u64::MAX / 2,
            clear_multiplier: u64::MAX,
            starting_lives: 3,
        };
        assert_eq!(brick_points(&scoring, 0), u64::MAX / 2);
        assert_eq!(brick_points(&scoring, 7), u64::MAX);
    }

    #[test]
    fn test_score_and_speed_laws_differ() {
        let tuning = Tuning {
            ball: crate::tuning::BallTuning {
                speed_multiplier: 2.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let base_speed = launch_velocity(&tuning, 0).length();
        let base_points = brick_points(&tuning.scoring, 0) as f32;

        let speed_ratios: Vec<f32> = (0..4)
            .map(|n| launch_velocity(&tuning, n).length() / base_speed)
            .collect();
        let point_ratios: Vec<f32> = (0..4)
            .map(|n| brick_points(&tuning.scoring, n) as f32 / base_points)
            .collect();

        // 1, 2, 4, 8 versus 1, 2, 4, 6
        assert!((speed_ratios[3] - 8.0).abs() < 1e-3);
        assert!((point_ratios[3] - 6.0).abs() < 1e-3);
        assert_ne!(speed_ratios, point_ratios);
    }

    #[test]
    fn test_reset_positions_idempotent() {
        let (_, tuning, mut world) = setup();
        world.set_paddle_position(Vec2::new(37.0, world.paddle_position().y));
        world.set_ball_position(Vec2::new(5.0, 5.0));

        reset_positions(&tuning, &mut world);
        let first = (world.ball_position(), world.paddle_position());
        reset_positions(&tuning, &mut world);
        let second = (world.ball_position(), world.paddle_position());

        assert_eq!(first, second);
        assert_eq!(first.1.x, tuning.layout.width * 0.5);
        assert_eq!(first.1.y, tuning.layout.paddle_spawn_position().y);
        // Directly above the paddle
        assert_eq!(first.0.x, first.1.x);
        assert!(first.0.y < first.1.y);
    }

    #[test]
    fn test_start_resets_counters() {
        let (mut state, tuning, mut world) = setup();
        state.hud.score = 500;
        state.hud.lives = 1;
        state.hud.cleared = 4;
        state.times_cleared = 4;

        tick(&mut state, &press_enter(), &tuning, &mut world);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.hud, crate::sim::Hud::new(3));
        assert_eq!(state.times_cleared, 0);
        assert!(!world.start_control_active());
        assert_eq!(world.ball_velocity(), tuning.ball.launch_velocity);
        assert_eq!(world.label_text(Label::Score), Some("Score: 0"));
        assert_eq!(world.label_text(Label::Cleared), Some("Cleared: 0"));
    }

    #[test]
    fn test_space_also_starts() {
        let (mut state, tuning, mut world) = setup();
        let input = TickInput {
            space: true,
            ..Default::default()
        };
        tick(&mut state, &input, &tuning, &mut world);
        assert!(state.is_playing());
    }

    #[test]
    fn test_start_while_playing_is_ignored() {
        let (mut state, tuning, mut world) = started();
        handle_event(&mut state, HostEvent::BallHitBrick(BrickId(0)), &tuning, &mut world);
        let score = state.hud.score;
        world.set_ball_velocity(Vec2::new(1.0, 2.0));

        tick(&mut state, &press_enter(), &tuning, &mut world);
        handle_event(&mut state, HostEvent::StartClicked, &tuning, &mut world);

        assert_eq!(state.hud.score, score);
        assert_eq!(world.ball_velocity(), Vec2::new(1.0, 2.0));
        assert!(!world.start_control_active());
    }

    #[test]
    fn test_idle_paddle_never_moves() {
        let (mut state, tuning, mut world) = setup();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..5 {
            tick(&mut state, &input, &tuning, &mut world);
        }
        // The scalar still integrates, but nothing reaches the paddle
        assert_eq!(state.paddle_velocity, 100.0);
        assert_eq!(world.paddle_velocity_x(), 0.0);
    }

    #[test]
    fn test_playing_paddle_follows_integrator() {
        let (mut state, tuning, mut world) = started();
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input, &tuning, &mut world);
        tick(&mut state, &input, &tuning, &mut world);
        assert_eq!(world.paddle_velocity_x(), -40.0);
    }

    #[test]
    fn test_paddle_hit_plays_feedback() {
        let (mut state, tuning, mut world) = started();
        handle_event(&mut state, HostEvent::BallHitPaddle, &tuning, &mut world);
        assert_eq!(world.sounds_played(SoundEffect::PaddleHit), 1);
        assert_eq!(world.animations(), &[Animation::Wobble]);
    }

    #[test]
    fn test_brick_hit_scores_and_disables() {
        let (mut state, tuning, mut world) = started();
        handle_event(&mut state, HostEvent::BallHitBrick(BrickId(5)), &tuning, &mut world);

        assert_eq!(state.hud.score, 10);
        assert_eq!(world.label_text(Label::Score), Some("Score: 10"));
        assert_eq!(world.sounds_played(SoundEffect::BrickHit), 1);
        let brick = world.brick(BrickId(5)).unwrap();
        assert!(!brick.body_enabled);
        assert!(brick.visible);
    }

    #[test]
    fn test_duplicate_brick_hit_ignored() {
        let (mut state, tuning, mut world) = started();
        handle_event(&mut state, HostEvent::BallHitBrick(BrickId(5)), &tuning, &mut world);
        handle_event(&mut state, HostEvent::BallHitBrick(BrickId(5)), &tuning, &mut world);
        assert_eq!(state.hud.score, 10);
        assert_eq!(world.sounds_played(SoundEffect::BrickHit), 1);
    }

    #[test]
    fn test_unknown_brick_ignored() {
        let (mut state, tuning, mut world) = started();
        handle_event(&mut state, HostEvent::BallHitBrick(BrickId(999)), &tuning, &mut world);
        assert_eq!(state.hud.score, 0);
    }

    #[test]
    fn test_fade_ends_invisible_and_uncollidable() {
        let (mut state, tuning, mut world) = started();
        handle_event(&mut state, HostEvent::BallHitBrick(BrickId(2)), &tuning, &mut world);

        // Other bricks keep getting hit while the first one fades
        run_ticks(&mut state, 3, &tuning, &mut world);
        handle_event(&mut state, HostEvent::BallHitBrick(BrickId(3)), &tuning, &mut world);
        run_ticks(&mut state, 3, &tuning, &mut world);
        handle_event(&mut state, HostEvent::BallHitBrick(BrickId(4)), &tuning, &mut world);

        let mid = world.brick(BrickId(2)).unwrap();
        assert!(mid.alpha < 1.0 && mid.alpha > 0.0);
        assert!(mid.visible);

        run_ticks(&mut state, 20, &tuning, &mut world);
        for id in [2, 3, 4] {
            let brick = world.brick(BrickId(id)).unwrap();
            assert!(!brick.visible, "brick {id} still visible");
            assert!(!brick.body_enabled, "brick {id} still collidable");
            assert_eq!(brick.alpha, 0.0);
            assert!(state.bricks.get(BrickId(id)).unwrap().fade.is_none());
        }
    }

    #[test]
    fn test_long_fade_hides_bricks_before_repopulation() {
        let tuning = Tuning::from_json(r#"{ "timing": { "brick_vanish_ms": 1000.0 } }"#).unwrap();
        let mut state = GameState::new(&tuning);
        let mut world = ArcadeWorld::new(&tuning, Settings::default());
        create_scene(&state, &tuning, &mut world);
        assert!(start_game(&mut state, &tuning, &mut world));
        hit_all_but(&mut state, 0, &tuning, &mut world);

        // ~1017ms: every fade is done, bricks come back at 1020ms
        run_ticks(&mut state, 61, &tuning, &mut world);
        assert_eq!(state.bricks.count_active(), 0);
        for brick in state.bricks.iter() {
            let body = world.brick(brick.id).unwrap();
            assert!(!body.visible && !body.body_enabled);
            assert!(brick.fade.is_none());
        }

        run_ticks(&mut state, 2, &tuning, &mut world);
        assert_eq!(state.bricks.count_active(), 21);
    }

    #[test]
    fn test_clearing_field_runs_one_sequence() {
        let (mut state, tuning, mut world) = started();
        hit_all_but(&mut state, 0, &tuning, &mut world);

        assert_eq!(state.level_clears, 1);
        assert_eq!(state.times_cleared, 1);
        assert_eq!(state.hud.cleared, 1);
        assert!(state.physics_paused);
        assert!(world.is_paused());
        assert_eq!(state.clock.pending_of(DelayedAction::ResumePhysics), 1);
        assert_eq!(state.clock.pending_of(DelayedAction::RepopulateBricks), 1);
        // 21 bricks at the base rate
        assert_eq!(state.hud.score, 210);
    }

    #[test]
    fn test_last_two_bricks_same_frame() {
        let (mut state, tuning, mut world) = started();
        hit_all_but(&mut state, 2, &tuning, &mut world);
        assert_eq!(state.level_clears, 0);

        let events = [
            HostEvent::BallHitBrick(BrickId(19)),
            HostEvent::BallHitBrick(BrickId(20)),
            // Stale duplicate from the same physics step
            HostEvent::BallHitBrick(BrickId(20)),
        ];
        step(&mut state, &TickInput::default(), events, &tuning, &mut world);

        assert_eq!(state.level_clears, 1);
        assert_eq!(state.times_cleared, 1);
    }

    #[test]
    fn test_level_clear_timeline() {
        let (mut state, tuning, mut world) = started();
        hit_all_but(&mut state, 0, &tuning, &mut world);
        assert_eq!(
            world.ball_velocity(),
            launch_velocity(&tuning, 1),
            "ball relaunched at the faster speed"
        );

        // ~967ms: still paused, bricks still gone
        run_ticks(&mut state, 58, &tuning, &mut world);
        assert!(world.is_paused());
        assert_eq!(state.bricks.count_active(), 0);

        // ~1017ms: physics resumes first, bricks follow at 1020ms
        run_ticks(&mut state, 3, &tuning, &mut world);
        assert!(!world.is_paused());
        assert_eq!(state.bricks.count_active(), 0);

        run_ticks(&mut state, 2, &tuning, &mut world);
        assert_eq!(state.bricks.count_active(), 21);
        for brick in state.bricks.iter() {
            let body = world.brick(brick.id).unwrap();
            assert!(body.body_enabled && body.visible);
            assert_eq!(body.alpha, 1.0);
        }
        assert_eq!(state.clock.pending(), 0);
    }

    #[test]
    fn test_second_level_scores_double() {
        let (mut state, tuning, mut world) = started();
        hit_all_but(&mut state, 0, &tuning, &mut world);
        run_ticks(&mut state, 70, &tuning, &mut world);

        let before = state.hud.score;
        handle_event(&mut state, HostEvent::BallHitBrick(BrickId(0)), &tuning, &mut world);
        assert_eq!(state.hud.score - before, 20);
    }

    #[test]
    fn test_life_lost() {
        let (mut state, tuning, mut world) = started();
        world.set_ball_position(Vec2::new(100.0, 310.0));
        handle_event(&mut state, HostEvent::WorldBounds(Blocked::DOWN), &tuning, &mut world);

        assert_eq!(state.hud.lives, 2);
        assert_eq!(world.label_text(Label::Lives), Some("Lives: 2"));
        assert!(world.is_paused());
        assert_eq!(world.ball_position(), tuning.layout.ball_rest_position());
        assert_eq!(state.level_clears, 0);
        assert!(state.is_playing());

        run_ticks(&mut state, 61, &tuning, &mut world);
        assert!(!world.is_paused());
    }

    #[test]
    fn test_other_bounds_ignored() {
        let (mut state, tuning, mut world) = started();
        let side = Blocked {
            left: true,
            up: true,
            ..Default::default()
        };
        handle_event(&mut state, HostEvent::WorldBounds(side), &tuning, &mut world);
        assert_eq!(state.hud.lives, 3);
        assert!(!world.is_paused());
    }

    #[test]
    fn test_last_life_runs_clear_and_game_over() {
        let (mut state, tuning, mut world) = started();
        state.hud.lives = 1;
        handle_event(&mut state, HostEvent::WorldBounds(Blocked::DOWN), &tuning, &mut world);

        assert_eq!(state.hud.lives, 0);
        assert_eq!(state.level_clears, 1);
        assert_eq!(state.times_cleared, 1);
        assert_eq!(state.hud.cleared, 1);
        assert_eq!(state.game_overs, 1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(world.start_control_active());
        assert_eq!(world.ball_velocity(), Vec2::ZERO);
        assert_eq!(state.clock.pending_of(DelayedAction::ResumePhysics), 2);
        assert_eq!(state.clock.pending_of(DelayedAction::RepopulateBricks), 1);
    }

    #[test]
    fn test_restart_after_game_over() {
        let (mut state, tuning, mut world) = started();
        state.hud.lives = 1;
        handle_event(&mut state, HostEvent::WorldBounds(Blocked::DOWN), &tuning, &mut world);
        run_ticks(&mut state, 70, &tuning, &mut world);
        assert!(!world.is_paused());

        world.click_start();
        let events = world.step(tuning.timing.frame_ms / 1000.0);
        assert_eq!(events, vec![HostEvent::StartClicked]);
        step(&mut state, &TickInput::default(), events, &tuning, &mut world);

        assert!(state.is_playing());
        assert_eq!(state.times_cleared, 0);
        assert_eq!(state.hud.lives, 3);
        assert_eq!(world.ball_velocity(), tuning.ball.launch_velocity);
        // Session counters survive the restart
        assert_eq!(state.level_clears, 1);
        assert_eq!(state.game_overs, 1);
    }
}
