//! Reference arcade host
//!
//! A minimal kinematic world implementing [`EnginePort`], so the controller
//! can run headless. Coordinates are screen pixels with y growing downward.
//! The ball bounces with full restitution off the world edges, the paddle
//! and enabled brick bodies; the paddle is immovable and clamped to the
//! world. Touching any world edge reports a `WorldBounds` event with the
//! blocked directions.

pub mod collision;

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use crate::assets::{Animation, SoundEffect, SpriteKey};
use crate::settings::Settings;
use crate::sim::{Blocked, BrickId, EnginePort, HostEvent, Label};
use crate::tuning::Tuning;
pub use collision::{Aabb, CollisionResult, ball_box_collision, reflect_velocity};

#[derive(Debug, Clone)]
pub struct BallBody {
    pub sprite: SpriteKey,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Per-axis velocity cap
    pub max_velocity: f32,
}

#[derive(Debug, Clone)]
pub struct PaddleBody {
    pub sprite: SpriteKey,
    /// Bottom centre
    pub pos: Vec2,
    pub size: Vec2,
    pub vx: f32,
}

impl PaddleBody {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos - Vec2::new(0.0, self.size.y * 0.5), self.size)
    }
}

#[derive(Debug, Clone)]
pub struct BrickBody {
    pub sprite: SpriteKey,
    pub pos: Vec2,
    pub size: Vec2,
    pub body_enabled: bool,
    pub visible: bool,
    pub alpha: f32,
}

/// A sound the host was asked to play, at the volume it played at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayedSound {
    pub effect: SoundEffect,
    pub volume: f32,
}

#[derive(Debug, Clone)]
struct StartControl {
    sprite: SpriteKey,
    active: bool,
}

/// Headless physics and presentation host
#[derive(Debug, Clone)]
pub struct ArcadeWorld {
    bounds: Vec2,
    settings: Settings,
    sprites: HashSet<SpriteKey>,
    sound_bank: HashSet<SoundEffect>,
    /// Registered animations and their playback length in ms
    clips: HashMap<Animation, f32>,
    ball: Option<BallBody>,
    paddle: Option<PaddleBody>,
    /// Indexed by brick id
    bricks: Vec<Option<BrickBody>>,
    labels: HashMap<Label, String>,
    start_control: Option<StartControl>,
    paused: bool,
    sounds: Vec<PlayedSound>,
    animations: Vec<Animation>,
    queued: Vec<HostEvent>,
}

impl ArcadeWorld {
    pub fn new(tuning: &Tuning, settings: Settings) -> Self {
        Self {
            bounds: Vec2::new(tuning.layout.width, tuning.layout.height),
            settings,
            sprites: HashSet::new(),
            sound_bank: HashSet::new(),
            clips: HashMap::new(),
            ball: None,
            paddle: None,
            bricks: Vec::new(),
            labels: HashMap::new(),
            start_control: None,
            paused: false,
            sounds: Vec::new(),
            animations: Vec::new(),
            queued: Vec::new(),
        }
    }

    /// Advance the physics by `dt` seconds and return the events it produced
    ///
    /// While paused nothing moves, but queued pointer events still come out.
    pub fn step(&mut self, dt: f32) -> Vec<HostEvent> {
        let mut events = std::mem::take(&mut self.queued);
        if self.paused {
            return events;
        }

        self.move_paddle(dt);

        let Some(mut ball) = self.ball.take() else {
            return events;
        };

        ball.vel = ball
            .vel
            .clamp(Vec2::splat(-ball.max_velocity), Vec2::splat(ball.max_velocity));
        ball.pos += ball.vel * dt;

        if let Some(blocked) = self.bounce_off_bounds(&mut ball) {
            events.push(HostEvent::WorldBounds(blocked));
        }

        if let Some(paddle) = &self.paddle {
            let result = ball_box_collision(ball.pos, ball.radius, &paddle.aabb());
            if result.hit {
                resolve(&mut ball, &result);
                events.push(HostEvent::BallHitPaddle);
            }
        }

        // Gather every contact at this position before separating, so a ball
        // landing on the seam between two bricks reports both
        let contacts: Vec<(BrickId, CollisionResult)> = self
            .bricks
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let brick = slot.as_ref().filter(|b| b.body_enabled)?;
                let result =
                    ball_box_collision(ball.pos, ball.radius, &Aabb::new(brick.pos, brick.size));
                result.hit.then_some((BrickId(index as u32), result))
            })
            .collect();
        for (id, result) in contacts {
            resolve(&mut ball, &result);
            events.push(HostEvent::BallHitBrick(id));
        }

        self.ball = Some(ball);
        events
    }

    /// Simulate a pointer press on the start control
    ///
    /// Hidden, inactive controls do not receive input.
    pub fn click_start(&mut self) -> bool {
        match &self.start_control {
            Some(control) if control.active => {
                log::debug!("Start control '{}' clicked", control.sprite.key());
                self.queued.push(HostEvent::StartClicked);
                true
            }
            _ => false,
        }
    }

    fn move_paddle(&mut self, dt: f32) {
        let width = self.bounds.x;
        let Some(paddle) = self.paddle.as_mut() else {
            return;
        };
        paddle.pos.x += paddle.vx * dt;

        let half = paddle.size.x * 0.5;
        if paddle.pos.x < half {
            paddle.pos.x = half;
            paddle.vx = 0.0;
        } else if paddle.pos.x > width - half {
            paddle.pos.x = width - half;
            paddle.vx = 0.0;
        }
    }

    fn bounce_off_bounds(&self, ball: &mut BallBody) -> Option<Blocked> {
        let mut blocked = Blocked::default();
        let r = ball.radius;

        if ball.pos.x - r < 0.0 {
            ball.pos.x = r;
            ball.vel.x = ball.vel.x.abs();
            blocked.left = true;
        } else if ball.pos.x + r > self.bounds.x {
            ball.pos.x = self.bounds.x - r;
            ball.vel.x = -ball.vel.x.abs();
            blocked.right = true;
        }

        if ball.pos.y - r < 0.0 {
            ball.pos.y = r;
            ball.vel.y = ball.vel.y.abs();
            blocked.up = true;
        } else if ball.pos.y + r > self.bounds.y {
            ball.pos.y = self.bounds.y - r;
            ball.vel.y = -ball.vel.y.abs();
            blocked.down = true;
        }

        (blocked != Blocked::default()).then_some(blocked)
    }

    // === Inspection ===

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn ball_position(&self) -> Vec2 {
        self.ball.as_ref().map(|b| b.pos).unwrap_or_default()
    }

    pub fn ball_velocity(&self) -> Vec2 {
        self.ball.as_ref().map(|b| b.vel).unwrap_or_default()
    }

    pub fn paddle_velocity_x(&self) -> f32 {
        self.paddle.as_ref().map(|p| p.vx).unwrap_or_default()
    }

    pub fn brick(&self, id: BrickId) -> Option<&BrickBody> {
        self.bricks.get(id.0 as usize).and_then(Option::as_ref)
    }

    pub fn brick_count(&self) -> usize {
        self.bricks.iter().flatten().count()
    }

    pub fn label_text(&self, label: Label) -> Option<&str> {
        self.labels.get(&label).map(String::as_str)
    }

    pub fn start_control_active(&self) -> bool {
        self.start_control.as_ref().is_some_and(|c| c.active)
    }

    pub fn sounds(&self) -> &[PlayedSound] {
        &self.sounds
    }

    pub fn sounds_played(&self, effect: SoundEffect) -> usize {
        self.sounds.iter().filter(|s| s.effect == effect).count()
    }

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    /// Sprites plus sounds loaded so far
    pub fn loaded_assets(&self) -> usize {
        self.sprites.len() + self.sound_bank.len()
    }

    fn require_sprite(&self, sprite: SpriteKey) {
        if !self.sprites.contains(&sprite) {
            log::warn!("Sprite '{}' used before it was loaded", sprite.key());
        }
    }

    fn brick_mut(&mut self, id: BrickId) -> Option<&mut BrickBody> {
        let brick = self.bricks.get_mut(id.0 as usize).and_then(Option::as_mut);
        if brick.is_none() {
            log::warn!("No brick body for {:?}", id);
        }
        brick
    }
}

/// Push the ball out of the surface and bounce it with full restitution
///
/// Only reflects when moving into the surface, so two contacts sharing a
/// normal in one step bounce the ball once.
fn resolve(ball: &mut BallBody, result: &CollisionResult) {
    ball.pos += result.normal * result.penetration;
    if ball.vel.dot(result.normal) < 0.0 {
        ball.vel = reflect_velocity(ball.vel, result.normal);
    }
}

impl EnginePort for ArcadeWorld {
    fn load_sprite(&mut self, sprite: SpriteKey) {
        match sprite.frame_size() {
            Some((w, h)) => log::debug!(
                "Loading spritesheet '{}' from {} ({w}x{h} frames)",
                sprite.key(),
                sprite.path()
            ),
            None => log::debug!("Loading image '{}' from {}", sprite.key(), sprite.path()),
        }
        self.sprites.insert(sprite);
    }

    fn load_sound(&mut self, effect: SoundEffect) {
        log::debug!("Loading sound '{}' from {}", effect.key(), effect.path());
        self.sound_bank.insert(effect);
    }

    fn create_animation(&mut self, animation: Animation) {
        let sheet = animation.sprite();
        if !self.sprites.contains(&sheet) || sheet.frame_size().is_none() {
            log::warn!(
                "Animation '{}' needs spritesheet '{}'; not registered",
                animation.key(),
                sheet.key()
            );
            return;
        }
        log::debug!(
            "Animation '{}': {} frames at {}fps",
            animation.key(),
            animation.frames().len(),
            animation.frame_rate()
        );
        self.clips.insert(animation, animation.duration_ms());
    }

    fn create_ball(&mut self, sprite: SpriteKey, pos: Vec2, radius: f32, max_velocity: f32) {
        self.require_sprite(sprite);
        self.ball = Some(BallBody {
            sprite,
            pos,
            vel: Vec2::ZERO,
            radius,
            max_velocity,
        });
    }

    fn create_paddle(&mut self, sprite: SpriteKey, pos: Vec2, size: Vec2) {
        self.require_sprite(sprite);
        self.paddle = Some(PaddleBody {
            sprite,
            pos,
            size,
            vx: 0.0,
        });
    }

    fn create_brick(&mut self, sprite: SpriteKey, id: BrickId, pos: Vec2, size: Vec2) {
        self.require_sprite(sprite);
        let index = id.0 as usize;
        if self.bricks.len() <= index {
            self.bricks.resize(index + 1, None);
        }
        self.bricks[index] = Some(BrickBody {
            sprite,
            pos,
            size,
            body_enabled: true,
            visible: true,
            alpha: 1.0,
        });
    }

    fn create_label(&mut self, label: Label, _pos: Vec2, text: &str) {
        self.labels.insert(label, text.to_string());
    }

    fn create_start_control(&mut self, sprite: SpriteKey, pos: Vec2) {
        self.require_sprite(sprite);
        log::debug!("Start control at ({:.0}, {:.0})", pos.x, pos.y);
        self.start_control = Some(StartControl {
            sprite,
            active: true,
        });
    }

    fn set_ball_position(&mut self, pos: Vec2) {
        if let Some(ball) = self.ball.as_mut() {
            ball.pos = pos;
        }
    }

    fn set_ball_velocity(&mut self, vel: Vec2) {
        if let Some(ball) = self.ball.as_mut() {
            ball.vel = vel;
        }
    }

    fn paddle_position(&self) -> Vec2 {
        self.paddle.as_ref().map(|p| p.pos).unwrap_or_default()
    }

    fn set_paddle_position(&mut self, pos: Vec2) {
        if let Some(paddle) = self.paddle.as_mut() {
            paddle.pos = pos;
        }
    }

    fn set_paddle_velocity_x(&mut self, vx: f32) {
        if let Some(paddle) = self.paddle.as_mut() {
            paddle.vx = vx;
        }
    }

    fn set_brick_body_enabled(&mut self, id: BrickId, enabled: bool) {
        if let Some(brick) = self.brick_mut(id) {
            brick.body_enabled = enabled;
        }
    }

    fn set_brick_alpha(&mut self, id: BrickId, alpha: f32) {
        if let Some(brick) = self.brick_mut(id) {
            brick.alpha = alpha.clamp(0.0, 1.0);
        }
    }

    fn set_brick_visible(&mut self, id: BrickId, visible: bool) {
        if let Some(brick) = self.brick_mut(id) {
            brick.visible = visible;
        }
    }

    fn pause_physics(&mut self) {
        self.paused = true;
    }

    fn resume_physics(&mut self) {
        self.paused = false;
    }

    fn play_sound(&mut self, effect: SoundEffect) {
        if !self.sound_bank.contains(&effect) {
            log::warn!("Sound '{}' was never loaded", effect.key());
            return;
        }
        let volume = self.settings.effective_volume();
        if volume <= 0.0 {
            return;
        }
        self.sounds.push(PlayedSound { effect, volume });
    }

    fn play_animation(&mut self, animation: Animation) {
        let Some(duration_ms) = self.clips.get(&animation).copied() else {
            log::warn!("Animation '{}' was never created", animation.key());
            return;
        };
        if self.settings.animations_enabled() {
            log::trace!("Playing '{}' for {duration_ms:.0}ms", animation.key());
            self.animations.push(animation);
        }
    }

    fn set_start_control(&mut self, active: bool) {
        if let Some(control) = self.start_control.as_mut() {
            control.active = active;
        }
    }

    fn set_label(&mut self, label: Label, text: &str) {
        self.labels.insert(label, text.to_string());
    }
}
