//! Score, lives and levels-cleared counters with their label bindings

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// On-screen text labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Score,
    Lives,
    Cleared,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Score, Label::Lives, Label::Cleared];

    /// Top-left anchor of the label
    pub fn position(&self) -> Vec2 {
        match self {
            Label::Score => Vec2::new(8.0, 8.0),
            Label::Lives => Vec2::new(140.0, 8.0),
            Label::Cleared => Vec2::new(240.0, 8.0),
        }
    }

    pub fn format(&self, value: u64) -> String {
        match self {
            Label::Score => format!("Score: {value}"),
            Label::Lives => format!("Lives: {value}"),
            Label::Cleared => format!("Cleared: {value}"),
        }
    }
}

/// Display counters, mutated only by the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub cleared: u32,
}

impl Hud {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            score: 0,
            lives: starting_lives,
            cleared: 0,
        }
    }

    pub fn add_points(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Take one life away. Returns true when none are left.
    pub fn remove_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    pub fn add_clear(&mut self) {
        self.cleared += 1;
    }

    pub fn value(&self, label: Label) -> u64 {
        match label {
            Label::Score => self.score,
            Label::Lives => self.lives as u64,
            Label::Cleared => self.cleared as u64,
        }
    }

    /// Current text for a label
    pub fn text(&self, label: Label) -> String {
        label.format(self.value(label))
    }
}
