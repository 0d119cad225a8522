//! Game loop controller
//!
//! All gameplay logic lives here. The controller owns an explicit
//! [`GameState`] and talks to the host engine only through [`EnginePort`]:
//! - One `tick` per rendered frame, fixed per-tick semantics
//! - Collisions arrive as [`HostEvent`]s, dispatched by `handle_event`
//! - Delayed actions run on a simulation clock that ignores physics pauses

pub mod bricks;
pub mod clock;
pub mod event;
pub mod hud;
pub mod paddle;
pub mod port;
pub mod state;
pub mod tick;

pub use bricks::{Brick, BrickField, BrickId, Fade};
pub use clock::{DelayedAction, Scheduler};
pub use event::{Blocked, HostEvent, TickInput};
pub use hud::{Hud, Label};
pub use paddle::integrate;
pub use port::EnginePort;
pub use state::{GamePhase, GameState};
pub use tick::{
    brick_points, create_scene, game_over, handle_event, launch_velocity, preload, reset_level,
    reset_positions, start_game, step, tick,
};
