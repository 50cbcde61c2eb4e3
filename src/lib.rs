//! Angr Logic - gameplay core for a grenade-throwing arcade game
//!
//! Core modules:
//! - `control`: Smoothing PID controller and 2D follow easing
//! - `logic`: Level state machine (score, enemies, grenades, finalization)
//! - `level`: Data-driven level definitions
//! - `tuning`: Data-driven gameplay balance
//! - `session`: Headless tick driver tying the pieces together

pub mod control;
pub mod error;
pub mod level;
pub mod logic;
pub mod session;
pub mod tuning;

pub use control::{FollowPid, Pid};
pub use error::{Error, Result};
pub use level::LevelConfig;
pub use logic::{ActiveLevel, GameState, Grenades, Phase};
pub use session::{Session, SessionStatus, TickInput};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Bonus points for every grenade left unused when a level is finalized
    pub const GRENADE_BONUS: i32 = 150;

    /// Highest badge tier a level can award
    pub const MAX_BADGES: i32 = 3;
}
