//! Circle versus axis-aligned box collision
//!
//! Everything in the arena is a box except the ball, so this is the only
//! narrow-phase test the reference host needs.

use glam::Vec2;

/// Contact between the ball and one box
#[derive(Debug, Clone)]
pub struct CollisionResult {
    pub hit: bool,
    /// Point on the box edge nearest the ball
    pub point: Vec2,
    /// Unit vector from the box face out toward the ball
    pub normal: Vec2,
    /// How far to push the ball along `normal` to clear the box
    pub penetration: f32,
}

impl CollisionResult {
    /// Ball and box are apart
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Axis-aligned box given by centre and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }
}

/// Check collision between a ball and a box
pub fn ball_box_collision(ball_pos: Vec2, ball_radius: f32, aabb: &Aabb) -> CollisionResult {
    let closest = ball_pos.clamp(aabb.min(), aabb.max());
    let offset = ball_pos - closest;
    let dist_sq = offset.length_squared();

    if dist_sq > ball_radius * ball_radius {
        return CollisionResult::miss();
    }

    if dist_sq > 1e-8 {
        let dist = dist_sq.sqrt();
        return CollisionResult {
            hit: true,
            point: closest,
            normal: offset / dist,
            penetration: ball_radius - dist,
        };
    }

    // Centre inside the box: push out along the shallowest axis
    let local = ball_pos - aabb.center;
    let depth = aabb.half - local.abs();
    let (normal, penetration) = if depth.x < depth.y {
        (Vec2::new(local.x.signum(), 0.0), depth.x + ball_radius)
    } else {
        (Vec2::new(0.0, local.y.signum()), depth.y + ball_radius)
    };
    CollisionResult {
        hit: true,
        point: closest,
        normal,
        penetration,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
