//! Inputs to the controller: held keys per frame and host events between frames

use serde::{Deserialize, Serialize};

use super::bricks::BrickId;

/// Held-key state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Start key (space)
    pub space: bool,
    /// Start key (enter)
    pub enter: bool,
}

impl TickInput {
    /// Either start key is held
    pub fn start_pressed(&self) -> bool {
        self.space || self.enter
    }
}

/// Which world edges blocked the body, as reported by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocked {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Blocked {
    pub const DOWN: Blocked = Blocked {
        up: false,
        down: true,
        left: false,
        right: false,
    };
}

/// Events the host engine delivers to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// Ball collided with the paddle
    BallHitPaddle,
    /// Ball collided with a brick body
    BallHitBrick(BrickId),
    /// Ball touched the world bounds
    WorldBounds(Blocked),
    /// Pointer pressed on the start control
    StartClicked,
}
