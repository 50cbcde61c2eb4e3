//! Headless level session
//!
//! Drives one level the way the game loop does: one `tick` per fixed
//! timestep, camera easing every tick, grenade throws resolved with a
//! seeded RNG so runs are reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::control::FollowPid;
use crate::error::Result;
use crate::level::LevelConfig;
use crate::logic::GameState;
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Throw a grenade this tick
    pub throw_grenade: bool,
    /// New camera target; keeps the previous one when `None`
    pub aim: Option<Vec2>,
}

/// Where the session stands after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    /// Final score counted with every enemy destroyed
    Cleared,
    /// Final score counted with enemies left
    Failed,
}

impl SessionStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, SessionStatus::Running)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    camera: FollowPid,
    aim: Vec2,
    tuning: Tuning,
    rng: Pcg32,
    status: SessionStatus,
    time_ticks: u64,
}

impl Session {
    pub fn new(level: &LevelConfig, tuning: Tuning, seed: u64) -> Self {
        let mut state = GameState::new();
        state.start_level(level);

        let mut camera = tuning.camera();
        camera.reset(Vec2::ZERO);

        log::info!("Session started with seed: {}", seed);
        Self {
            state,
            camera,
            aim: Vec2::ZERO,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            status: SessionStatus::Running,
            time_ticks: 0,
        }
    }

    /// Advance by one timestep.
    ///
    /// A bad `dt` is rejected before anything changes. Once the level is
    /// over, ticks are no-ops that report the final status.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Result<SessionStatus> {
        if self.status.is_over() {
            return Ok(self.status);
        }

        if let Some(aim) = input.aim {
            self.aim = aim;
        }
        self.camera.try_update(self.aim, dt)?;
        self.time_ticks += 1;

        if input.throw_grenade && self.state.use_grenade() {
            if self.rng.random_bool(self.tuning.effective_hit_chance()) {
                self.state.add_points(self.tuning.points_per_kill, true);
            } else {
                log::debug!(
                    "Tick {}: grenade missed ({} left)",
                    self.time_ticks,
                    self.state.grenades().count()
                );
            }
        }

        if !self.state.update() {
            self.status = if self.state.count_final_score() {
                SessionStatus::Cleared
            } else {
                SessionStatus::Failed
            };
            log::info!(
                "Level over after {} ticks: {:?}, {}, badges={}",
                self.time_ticks,
                self.status,
                self.state,
                self.state.badges()
            );
        }

        Ok(self.status)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn camera_position(&self) -> Vec2 {
        self.camera.position()
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}
