//! Level logic
//!
//! Discrete, deterministic bookkeeping for a single level: score, enemies
//! left, grenades left and the one-way finalization latch.

pub mod grenades;
pub mod state;

pub use grenades::Grenades;
pub use state::{ActiveLevel, GameState, Phase};
