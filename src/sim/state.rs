//! Game state
//!
//! Everything the controller mutates between frames lives in one owned
//! struct, handed to every tick and event handler.

use serde::{Deserialize, Serialize};

use super::bricks::BrickField;
use super::clock::Scheduler;
use super::hud::Hud;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start, or after game over; start control shown
    #[default]
    Idle,
    /// Active gameplay
    Playing,
}

/// Complete controller state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub hud: Hud,
    /// Carried paddle velocity, `|v| <= max_velocity` after every tick
    pub paddle_velocity: f32,
    /// Times the brick field has been emptied this session
    pub times_cleared: u32,
    pub bricks: BrickField,
    pub clock: Scheduler,
    /// Mirror of the host's physics pause state
    pub physics_paused: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Level clear sequences started this session, never reset by a restart
    pub level_clears: u32,
    /// Game over transitions this session; the binary reports it at exit
    pub game_overs: u32,
}

impl GameState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Idle,
            hud: Hud::new(tuning.scoring.starting_lives),
            paddle_velocity: 0.0,
            times_cleared: 0,
            bricks: BrickField::new(&tuning.bricks),
            clock: Scheduler::new(),
            physics_paused: false,
            time_ticks: 0,
            level_clears: 0,
            game_overs: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
