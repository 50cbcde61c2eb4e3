//! Self-referential PID controller
//!
//! The error term is measured against the controller's own previous output
//! rather than an external sensor reading. Feeding it a setpoint every tick
//! makes the output ease toward that setpoint.

use crate::error::{Error, Result};

/// PID controller with fixed gains
#[derive(Debug, Clone, PartialEq)]
pub struct Pid {
    kp: f32,
    ki: f32,
    kd: f32,
    /// Accumulated error * dt
    integral: f32,
    previous_error: f32,
    output: f32,
}

impl Pid {
    /// Create a controller with the given gains and all state at zero
    pub fn new(kp: f32, ki: f32, kd: f32) -> Self {
        Self {
            kp,
            ki,
            kd,
            integral: 0.0,
            previous_error: 0.0,
            output: 0.0,
        }
    }

    /// Jump the output to `output` and forget all accumulated error.
    ///
    /// Call this before reusing the controller across a discontinuity
    /// (level restart, retarget) so the integral term doesn't wind up.
    pub fn reset(&mut self, output: f32) {
        self.output = output;
        self.integral = 0.0;
        self.previous_error = 0.0;
    }

    /// Advance the controller by one tick toward `setpoint`.
    ///
    /// `dt` must be > 0. A zero `dt` divides by zero in the derivative term
    /// and the resulting non-finite value is stored in the output as is;
    /// use [`Pid::try_update`] to have it rejected instead.
    pub fn update(&mut self, setpoint: f32, dt: f32) {
        let error = setpoint - self.output;
        self.integral += error * dt;
        let derivative = (error - self.previous_error) / dt;
        self.output = self.kp * error + self.ki * self.integral + self.kd * derivative;
        self.previous_error = error;
    }

    /// Checked [`Pid::update`]: rejects a non-positive or non-finite `dt`
    /// without touching any state, otherwise returns the new output.
    pub fn try_update(&mut self, setpoint: f32, dt: f32) -> Result<f32> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(Error::InvalidTimeStep(dt));
        }
        self.update(setpoint, dt);
        Ok(self.output)
    }

    /// Last computed output
    pub fn output(&self) -> f32 {
        self.output
    }

    /// Proportional, integral and derivative gains
    pub fn gains(&self) -> (f32, f32, f32) {
        (self.kp, self.ki, self.kd)
    }
}
