//! Continuous control
//!
//! Controllers here treat their own last output as the measured value, so
//! they behave as easing filters that chase a moving setpoint tick by tick.
//! They are pure and hold no clock: the caller supplies `dt`.

pub mod follow;
pub mod pid;

pub use follow::FollowPid;
pub use pid::Pid;
