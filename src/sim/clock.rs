//! Delayed one-shot actions on the simulation clock
//!
//! The clock advances every tick, including while physics is paused, so a
//! pause never stalls the actions that end it.

use serde::{Deserialize, Serialize};

/// Zero-argument actions the controller can schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelayedAction {
    /// Resume the physics simulation
    ResumePhysics,
    /// Re-enable every brick body and restore full visibility
    RepopulateBricks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Timer {
    due_ms: f64,
    seq: u64,
    action: DelayedAction,
}

/// One-shot timer queue; entries are neither cancellable nor deduplicated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    now_ms: f64,
    next_seq: u64,
    pending: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` once, `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: f32, action: DelayedAction) {
        let timer = Timer {
            due_ms: self.now_ms + delay_ms.max(0.0) as f64,
            seq: self.next_seq,
            action,
        };
        self.next_seq += 1;
        log::debug!("Scheduled {:?} at {:.0}ms", action, timer.due_ms);
        self.pending.push(timer);
    }

    /// Advance the clock and drain every action that came due, earliest first
    ///
    /// Actions due at the same instant fire in scheduling order.
    pub fn advance(&mut self, dt_ms: f32) -> Vec<DelayedAction> {
        self.now_ms += dt_ms as f64;
        let now = self.now_ms;

        let mut due: Vec<Timer> = Vec::new();
        self.pending.retain(|t| {
            if t.due_ms <= now {
                due.push(t.clone());
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|t| t.action).collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of pending entries for a given action
    pub fn pending_of(&self, action: DelayedAction) -> usize {
        self.pending.iter().filter(|t| t.action == action).count()
    }
}
