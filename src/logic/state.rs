//! Level state machine
//!
//! A level is `Active` until its final score is counted, then `Finalized`
//! for good. Score and enemy bookkeeping can only be reached through an
//! [`ActiveLevel`] handle, which a finalized state never hands out.

use std::fmt;

use super::grenades::Grenades;
use crate::consts::{GRENADE_BONUS, MAX_BADGES};
use crate::level::LevelConfig;

/// Lifecycle of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Play in progress, mutations allowed
    #[default]
    Active,
    /// Final score counted; terminal
    Finalized,
}

/// Score, enemies and grenades of the level being played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    score: i32,
    /// Points needed per badge, always >= 1
    badge_scale: i32,
    /// Enemies left; only goes negative if more kills are reported than
    /// enemies were placed
    enemy_count: i32,
    grenades: Grenades,
    phase: Phase,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            badge_scale: 1,
            enemy_count: 0,
            grenades: Grenades::new(0),
            phase: Phase::Active,
        }
    }
}

/// Mutation handle, only obtainable while the level is active
#[derive(Debug)]
pub struct ActiveLevel<'a> {
    state: &'a mut GameState,
}

impl ActiveLevel<'_> {
    /// Configure a fresh level. A non-positive `badge_scale` becomes 1.
    /// The grenade counter is replaced, not topped up.
    pub fn init(&mut self, badge_scale: i32, enemies: i32, grenades: u32) {
        let state = &mut *self.state;
        if badge_scale > 0 {
            state.badge_scale = badge_scale;
        } else {
            log::warn!("Badge scale {} is not positive, using 1", badge_scale);
            state.badge_scale = 1;
        }
        state.enemy_count = enemies;
        state.grenades = Grenades::new(grenades);
        log::info!(
            "Level init: badge_scale={}, enemies={}, grenades={}",
            state.badge_scale,
            enemies,
            grenades
        );
    }

    /// Credit `value` points (may be negative) and optionally one kill
    pub fn add_points(&mut self, value: i32, enemy_destroyed: bool) {
        let state = &mut *self.state;
        state.score = state.score.saturating_add(value);
        if enemy_destroyed {
            state.enemy_count = state.enemy_count.saturating_sub(1);
        }
        log::debug!(
            "Points {:+}: score={}, enemies={}",
            value,
            state.score,
            state.enemy_count
        );
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutation handle, or `None` once the level is finalized
    pub fn active(&mut self) -> Option<ActiveLevel<'_>> {
        match self.phase {
            Phase::Active => Some(ActiveLevel { state: self }),
            Phase::Finalized => None,
        }
    }

    /// [`ActiveLevel::init`] if active; ignored after finalization
    pub fn init(&mut self, badge_scale: i32, enemies: i32, grenades: u32) {
        match self.active() {
            Some(mut level) => level.init(badge_scale, enemies, grenades),
            None => log::warn!("init ignored: level already finalized"),
        }
    }

    /// Initialize from a level definition
    pub fn start_level(&mut self, level: &LevelConfig) {
        self.init(level.badge_scale, level.enemies, level.grenades);
    }

    /// [`ActiveLevel::add_points`] if active; ignored after finalization
    pub fn add_points(&mut self, value: i32, enemy_destroyed: bool) {
        match self.active() {
            Some(mut level) => level.add_points(value, enemy_destroyed),
            None => log::warn!("add_points({}) ignored: level already finalized", value),
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn badge_scale(&self) -> i32 {
        self.badge_scale
    }

    pub fn enemy_count(&self) -> i32 {
        self.enemy_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Finalized
    }

    pub fn grenades(&self) -> &Grenades {
        &self.grenades
    }

    /// Use up one grenade, allowed in any phase. Returns false when none
    /// were left. This is the only way the counter changes outside `init`.
    pub fn use_grenade(&mut self) -> bool {
        if self.grenades.is_empty() {
            return false;
        }
        self.grenades.decrement();
        true
    }

    /// Badges earned, 0..=3. Always 0 while enemies remain.
    pub fn badges(&self) -> i32 {
        if self.enemy_count == 0 {
            (self.score / self.badge_scale).clamp(0, MAX_BADGES)
        } else {
            0
        }
    }

    /// Whether play should continue this tick.
    ///
    /// Returns false when finalized, when no enemies are left, or when no
    /// grenades are left. It does not say whether the level was won; that
    /// is the return value of [`GameState::count_final_score`].
    pub fn update(&self) -> bool {
        if self.is_finalized() {
            return false;
        }
        if self.enemy_count <= 0 {
            return false;
        }
        !self.grenades.is_empty()
    }

    /// Seal the level and report whether it was cleared.
    ///
    /// The first call adds the unused-grenade bonus and finalizes; later
    /// calls leave the score alone. Every call returns `enemy_count == 0`.
    pub fn count_final_score(&mut self) -> bool {
        if self.phase == Phase::Active {
            self.phase = Phase::Finalized;
            let left = i32::try_from(self.grenades.count()).unwrap_or(i32::MAX);
            self.score = self.score.saturating_add(left.saturating_mul(GRENADE_BONUS));
            log::info!(
                "Level finalized: score={}, enemies left={}, grenades left={}",
                self.score,
                self.enemy_count,
                left
            );
        }
        self.enemy_count == 0
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {}", self.score)
    }
}
