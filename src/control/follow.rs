//! 2D easing built from one PID per axis
//!
//! Used for camera/character motion: the position eases toward a target
//! that may move every tick.

use glam::Vec2;

use super::pid::Pid;
use crate::error::Result;

/// A point that follows a target through per-axis PID smoothing
#[derive(Debug, Clone, PartialEq)]
pub struct FollowPid {
    x: Pid,
    y: Pid,
}

impl FollowPid {
    /// Both axes share the same gains
    pub fn new(kp: f32, ki: f32, kd: f32) -> Self {
        Self {
            x: Pid::new(kp, ki, kd),
            y: Pid::new(kp, ki, kd),
        }
    }

    /// Snap to `pos`, dropping any accumulated error on both axes
    pub fn reset(&mut self, pos: Vec2) {
        self.x.reset(pos.x);
        self.y.reset(pos.y);
    }

    /// Ease toward `target`; same `dt` precondition as [`Pid::update`]
    pub fn update(&mut self, target: Vec2, dt: f32) -> Vec2 {
        self.x.update(target.x, dt);
        self.y.update(target.y, dt);
        self.position()
    }

    /// Checked [`FollowPid::update`]. A bad `dt` leaves both axes untouched.
    pub fn try_update(&mut self, target: Vec2, dt: f32) -> Result<Vec2> {
        // x validates dt first, so y is never stepped alone
        self.x.try_update(target.x, dt)?;
        self.y.try_update(target.y, dt)?;
        Ok(self.position())
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.output(), self.y.output())
    }
}
