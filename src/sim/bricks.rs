//! Brick field bookkeeping
//!
//! Bricks are created once and only ever toggled: a hit disables the body
//! immediately and starts a fade, the fade's end hides the sprite, and
//! repopulation brings every brick back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::BrickTuning;

/// Stable brick handle shared with the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BrickId(pub u32);

/// Linear alpha fade from 1 to 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fade {
    pub elapsed_ms: f32,
    pub duration_ms: f32,
}

impl Fade {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            elapsed_ms: 0.0,
            duration_ms,
        }
    }

    pub fn alpha(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 0.0;
        }
        (1.0 - self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

/// Outcome of advancing a brick's fade by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeStep {
    /// Still fading, new alpha
    Fading(f32),
    /// Fade finished; brick is now invisible and uncollidable
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: BrickId,
    pub row: u32,
    pub col: u32,
    /// Centre position
    pub pos: Vec2,
    /// Collision body enabled (counts as active)
    pub body_enabled: bool,
    pub visible: bool,
    pub alpha: f32,
    pub fade: Option<Fade>,
}

impl Brick {
    fn new(id: BrickId, row: u32, col: u32, pos: Vec2) -> Self {
        Self {
            id,
            row,
            col,
            pos,
            body_enabled: true,
            visible: true,
            alpha: 1.0,
            fade: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.body_enabled
    }

    /// Register a ball hit. Returns false if the body was already disabled.
    ///
    /// The sprite stays visible while the fade runs.
    pub fn hit(&mut self, vanish_ms: f32) -> bool {
        if !self.body_enabled {
            return false;
        }
        self.body_enabled = false;
        self.fade = Some(Fade::new(vanish_ms));
        true
    }

    /// Advance the fade, if any
    pub fn advance_fade(&mut self, dt_ms: f32) -> Option<FadeStep> {
        let fade = self.fade.as_mut()?;
        fade.elapsed_ms += dt_ms;

        if fade.is_complete() {
            self.fade = None;
            self.alpha = 0.0;
            self.visible = false;
            self.body_enabled = false;
            Some(FadeStep::Finished)
        } else {
            self.alpha = fade.alpha();
            Some(FadeStep::Fading(self.alpha))
        }
    }

    /// Bring the brick back: body on, fully visible, any fade dropped
    pub fn restore(&mut self) {
        self.body_enabled = true;
        self.visible = true;
        self.alpha = 1.0;
        self.fade = None;
    }
}

/// Fixed grid of bricks, row-major by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
    size: Vec2,
}

impl BrickField {
    pub fn new(layout: &BrickTuning) -> Self {
        let mut bricks = Vec::with_capacity(layout.count());
        for col in 0..layout.cols {
            for row in 0..layout.rows {
                let id = BrickId(bricks.len() as u32);
                bricks.push(Brick::new(id, row, col, layout.position(row, col)));
            }
        }
        Self {
            bricks,
            size: layout.size(),
        }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Brick size shared by every brick in the field
    pub fn brick_size(&self) -> Vec2 {
        self.size
    }

    pub fn get(&self, id: BrickId) -> Option<&Brick> {
        self.bricks.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: BrickId) -> Option<&mut Brick> {
        self.bricks.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    /// Bricks whose body is still enabled
    pub fn count_active(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_active()).count()
    }

    pub fn restore_all(&mut self) {
        for brick in &mut self.bricks {
            brick.restore();
        }
    }
}
