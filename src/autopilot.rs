//! Demo player
//!
//! Tracks the ball with a seeded aim error so runs are reproducible but not
//! perfect. Presses enter whenever the game is idle.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GamePhase, TickInput};

/// Ticks between aim error re-rolls
const RETARGET_TICKS: u32 = 45;
/// No input while the target is this close to the paddle centre
const DEAD_ZONE: f32 = 6.0;

pub struct Autopilot {
    rng: Pcg32,
    /// Maximum horizontal aim error (pixels)
    aim_error: f32,
    offset: f32,
    ticks: u32,
}

impl Autopilot {
    pub fn new(seed: u64, aim_error: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim_error: aim_error.abs(),
            offset: 0.0,
            ticks: 0,
        }
    }

    /// Held keys for this frame
    pub fn input(&mut self, phase: GamePhase, ball: Vec2, paddle: Vec2) -> TickInput {
        if phase == GamePhase::Idle {
            return TickInput {
                enter: true,
                ..Default::default()
            };
        }

        if self.ticks % RETARGET_TICKS == 0 {
            self.offset = self.rng.random_range(-self.aim_error..=self.aim_error);
        }
        self.ticks += 1;

        let target = ball.x + self.offset;
        TickInput {
            left: target < paddle.x - DEAD_ZONE,
            right: target > paddle.x + DEAD_ZONE,
            ..Default::default()
        }
    }
}
