//! Brick Breaker - a single-screen ball and paddle arcade game
//!
//! Core modules:
//! - `sim`: Game loop controller (paddle integrator, collisions, level sequencing)
//! - `world`: Reference arcade host implementing the engine port
//! - `autopilot`: Seeded demo player
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences
//! - `assets`: Sprite and sound keys

pub mod assets;
pub mod autopilot;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod world;

pub use autopilot::Autopilot;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};
pub use world::ArcadeWorld;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 320.0;

    /// Sprite sizes (pixels)
    pub const BALL_SIZE: f32 = 20.0;
    pub const PADDLE_WIDTH: f32 = 64.0;
    pub const PADDLE_HEIGHT: f32 = 16.0;
    /// Gap between the bottom of the paddle and the canvas floor
    pub const PADDLE_FLOOR_GAP: f32 = 5.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_COLS: u32 = 7;
    pub const BRICK_OFFSET_TOP: f32 = 50.0;
    pub const BRICK_OFFSET_LEFT: f32 = 60.0;
    pub const BRICK_PADDING: f32 = 10.0;
    /// Largest grid a tuning file may ask for
    pub const MAX_BRICKS: u32 = 4096;

    /// Paddle physics, applied once per frame
    pub const PADDLE_ACCELERATION: f32 = 20.0;
    pub const PADDLE_DRAG: f32 = 10.0;
    pub const PADDLE_MAX_VELOCITY: f32 = 300.0;
    /// Below `drag * DRAG_SNAP_FACTOR` an idle paddle stops dead
    pub const DRAG_SNAP_FACTOR: f32 = 1.1;

    /// Ball launch vector at zero levels cleared (up and to the right)
    pub const BALL_LAUNCH_X: f32 = 150.0;
    pub const BALL_LAUNCH_Y: f32 = -150.0;
    /// Launch speed grows by this factor per level cleared
    pub const BALL_SPEED_MULTIPLIER: f32 = 1.2;
    /// Per-axis ball velocity cap
    pub const BALL_MAX_VELOCITY: f32 = 400.0;

    /// Scoring
    pub const BASE_POINTS: u64 = 10;
    pub const CLEAR_MULTIPLIER: u64 = 2;
    pub const STARTING_LIVES: u32 = 3;

    /// Timing (milliseconds of simulation clock)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    pub const DEATH_DELAY_MS: f32 = 1000.0;
    pub const BRICK_VANISH_MS: f32 = 250.0;
    /// Bricks repopulate this long after physics resumes
    pub const REPOPULATE_LAG_MS: f32 = 20.0;
}
