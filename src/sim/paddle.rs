//! Paddle velocity integrator
//!
//! Runs once per frame with constants expressed per frame, so feel is tied to
//! the tick cadence rather than to wall-clock time.

use super::event::TickInput;
use crate::consts::DRAG_SNAP_FACTOR;
use crate::tuning::PaddleTuning;

/// Advance the carried paddle velocity by one frame
///
/// Left wins over right when both are held. With no input the velocity
/// decays toward zero by `drag` and snaps to exactly zero once it is within
/// `drag * 1.1`, so an idle paddle never drifts or oscillates around zero.
/// The result always satisfies `|v| <= max_velocity`.
pub fn integrate(velocity: f32, input: &TickInput, tuning: &PaddleTuning) -> f32 {
    let mut v = velocity;

    if input.left {
        v -= tuning.acceleration;
    } else if input.right {
        v += tuning.acceleration;
    } else {
        if v > 0.0 {
            v -= tuning.drag;
        } else if v < 0.0 {
            v += tuning.drag;
        }
        if v.abs() < tuning.drag * DRAG_SNAP_FACTOR {
            v = 0.0;
        }
    }

    if v.abs() > tuning.max_velocity {
        v = tuning.max_velocity.copysign(v);
    }
    v
}
