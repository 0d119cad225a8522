//! Boundary to the host engine
//!
//! The controller never owns sprites or physics bodies. It creates them once
//! through this trait and then only repositions, toggles and re-velocitises
//! them. Collision detection, rendering, audio output and tweening stay on
//! the host side.

use glam::Vec2;

use super::bricks::BrickId;
use super::hud::Label;
use crate::assets::{Animation, SoundEffect, SpriteKey};

pub trait EnginePort {
    // === Assets ===
    /// Load an image or spritesheet from `sprite.path()`
    fn load_sprite(&mut self, sprite: SpriteKey);
    fn load_sound(&mut self, effect: SoundEffect);
    /// Register a frame animation on its (already loaded) spritesheet
    fn create_animation(&mut self, animation: Animation);

    // === Scene creation ===
    /// Spawn the ball body (bounces fully, collides with world bounds)
    fn create_ball(&mut self, sprite: SpriteKey, pos: Vec2, radius: f32, max_velocity: f32);
    /// Spawn the immovable paddle; `pos` is its bottom centre
    fn create_paddle(&mut self, sprite: SpriteKey, pos: Vec2, size: Vec2);
    /// Spawn a static brick body centred on `pos`
    fn create_brick(&mut self, sprite: SpriteKey, id: BrickId, pos: Vec2, size: Vec2);
    fn create_label(&mut self, label: Label, pos: Vec2, text: &str);
    fn create_start_control(&mut self, sprite: SpriteKey, pos: Vec2);

    // === Ball ===
    fn set_ball_position(&mut self, pos: Vec2);
    fn set_ball_velocity(&mut self, vel: Vec2);

    // === Paddle ===
    fn paddle_position(&self) -> Vec2;
    fn set_paddle_position(&mut self, pos: Vec2);
    fn set_paddle_velocity_x(&mut self, vx: f32);

    // === Bricks ===
    fn set_brick_body_enabled(&mut self, id: BrickId, enabled: bool);
    fn set_brick_alpha(&mut self, id: BrickId, alpha: f32);
    fn set_brick_visible(&mut self, id: BrickId, visible: bool);

    // === Physics world ===
    fn pause_physics(&mut self);
    fn resume_physics(&mut self);

    // === Presentation ===
    fn play_sound(&mut self, effect: SoundEffect);
    fn play_animation(&mut self, animation: Animation);
    /// Show and activate, or hide and deactivate, the start control
    fn set_start_control(&mut self, active: bool);
    fn set_label(&mut self, label: Label, text: &str);
}
