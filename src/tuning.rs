//! Data-driven game balance
//!
//! Every gameplay constant the controller reads lives here so a session can
//! be re-tuned from a JSON file without recompiling. Missing sections fall
//! back to the defaults in [`crate::consts`].

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Paddle velocity integrator constants (per frame)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleTuning {
    pub acceleration: f32,
    pub drag: f32,
    pub max_velocity: f32,
}

impl Default for PaddleTuning {
    fn default() -> Self {
        Self {
            acceleration: PADDLE_ACCELERATION,
            drag: PADDLE_DRAG,
            max_velocity: PADDLE_MAX_VELOCITY,
        }
    }
}

/// Ball launch and speed growth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallTuning {
    /// Launch vector at zero levels cleared
    pub launch_velocity: Vec2,
    /// Exponential growth factor per level cleared
    pub speed_multiplier: f32,
    /// Per-axis velocity cap enforced by the host
    pub max_velocity: f32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            launch_velocity: Vec2::new(BALL_LAUNCH_X, BALL_LAUNCH_Y),
            speed_multiplier: BALL_SPEED_MULTIPLIER,
            max_velocity: BALL_MAX_VELOCITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    pub base_points: u64,
    /// Linear growth factor per level cleared
    pub clear_multiplier: u64,
    pub starting_lives: u32,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            base_points: BASE_POINTS,
            clear_multiplier: CLEAR_MULTIPLIER,
            starting_lives: STARTING_LIVES,
        }
    }
}

/// Delays, all in milliseconds of simulation clock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingTuning {
    /// Clock advance per tick
    pub frame_ms: f32,
    /// Physics pause after a life loss or level clear
    pub death_delay_ms: f32,
    /// Brick fade-out duration
    pub brick_vanish_ms: f32,
    /// Extra wait before bricks come back, on top of `death_delay_ms`
    pub repopulate_lag_ms: f32,
}

impl Default for TimingTuning {
    fn default() -> Self {
        Self {
            frame_ms: FRAME_MS,
            death_delay_ms: DEATH_DELAY_MS,
            brick_vanish_ms: BRICK_VANISH_MS,
            repopulate_lag_ms: REPOPULATE_LAG_MS,
        }
    }
}

/// Brick grid layout (positions are brick centres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickTuning {
    pub rows: u32,
    pub cols: u32,
    pub width: f32,
    pub height: f32,
    pub offset_top: f32,
    pub offset_left: f32,
    pub padding: f32,
}

impl Default for BrickTuning {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
            padding: BRICK_PADDING,
        }
    }
}

impl BrickTuning {
    /// Number of bricks, `None` if `rows * cols` overflows
    pub fn checked_count(&self) -> Option<u32> {
        self.rows.checked_mul(self.cols)
    }

    pub fn count(&self) -> usize {
        self.rows.saturating_mul(self.cols) as usize
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Centre of the brick at (row, col)
    pub fn position(&self, row: u32, col: u32) -> Vec2 {
        Vec2::new(
            col as f32 * (self.width + self.padding) + self.offset_left,
            row as f32 * (self.height + self.padding) + self.offset_top,
        )
    }
}

/// Canvas and sprite geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTuning {
    pub width: f32,
    pub height: f32,
    pub paddle_size: Vec2,
    pub ball_size: f32,
    pub paddle_floor_gap: f32,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            ball_size: BALL_SIZE,
            paddle_floor_gap: PADDLE_FLOOR_GAP,
        }
    }
}

impl LayoutTuning {
    /// Where the ball rests before launch: centred, one ball-height above the paddle
    pub fn ball_rest_position(&self) -> Vec2 {
        Vec2::new(
            self.width * 0.5,
            self.height - self.paddle_size.y - self.ball_size,
        )
    }

    /// Initial paddle anchor (bottom centre of the sprite)
    pub fn paddle_spawn_position(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height - self.paddle_floor_gap)
    }
}

/// Complete game balance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub paddle: PaddleTuning,
    pub ball: BallTuning,
    pub scoring: ScoringTuning,
    pub timing: TimingTuning,
    pub bricks: BrickTuning,
    pub layout: LayoutTuning,
}

/// Errors raised while loading a tuning file
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning file: {e}"),
            TuningError::Parse(e) => write!(f, "failed to parse tuning: {e}"),
            TuningError::Invalid(reason) => write!(f, "invalid tuning: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a JSON tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the integrator and scheduler cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("paddle.acceleration", self.paddle.acceleration),
            ("paddle.drag", self.paddle.drag),
            ("paddle.max_velocity", self.paddle.max_velocity),
            ("ball.speed_multiplier", self.ball.speed_multiplier),
            ("ball.max_velocity", self.ball.max_velocity),
            ("timing.frame_ms", self.timing.frame_ms),
            ("layout.width", self.layout.width),
            ("layout.height", self.layout.height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("timing.death_delay_ms", self.timing.death_delay_ms),
            ("timing.brick_vanish_ms", self.timing.brick_vanish_ms),
            ("timing.repopulate_lag_ms", self.timing.repopulate_lag_ms),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        match self.bricks.checked_count() {
            Some(0) => return Err(TuningError::Invalid("brick grid is empty".to_string())),
            Some(n) if n <= MAX_BRICKS => {}
            _ => {
                return Err(TuningError::Invalid(format!(
                    "brick grid {}x{} exceeds {MAX_BRICKS} bricks",
                    self.bricks.rows, self.bricks.cols
                )));
            }
        }

        // A fade still running at repopulation would be dropped before it hides the brick
        let repopulate_ms = self.timing.death_delay_ms + self.timing.repopulate_lag_ms;
        if self.timing.brick_vanish_ms >= repopulate_ms {
            return Err(TuningError::Invalid(format!(
                "timing.brick_vanish_ms ({}) must be shorter than death_delay_ms + repopulate_lag_ms ({repopulate_ms})",
                self.timing.brick_vanish_ms
            )));
        }
        Ok(())
    }
}
