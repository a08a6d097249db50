//! Data-driven game balance
//!
//! Every number that shapes a run lives here. `Tuning::default()` is the
//! shipped balance; alternative balances can be loaded from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a tuning document is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Cells per board edge
    pub grid_size: i32,

    // === Pace ===
    /// Step interval at score 0 (ms)
    pub start_interval_ms: u32,
    /// Step interval never drops below this (ms)
    pub min_interval_ms: u32,
    /// Interval reduction per difficulty level (ms)
    pub interval_step_ms: u32,
    /// Points needed per difficulty level
    pub points_per_level: u64,

    // === Board population at start ===
    pub initial_obstacles: usize,
    pub initial_power_ups: usize,
    pub initial_speed_boosts: usize,

    // === Scoring ===
    pub food_score: u64,
    pub grow_score: u64,
    pub boost_score: u64,

    // === Pickups ===
    /// Segments added by a Grow power-up
    pub grow_segments: usize,
    /// Invincibility duration (ms of tick time)
    pub invincible_ms: f64,
    /// Speed boost duration (ms of wall time)
    pub boost_duration_ms: f64,
    /// Boost factor is drawn from `[boost_factor_min, boost_factor_max)`
    pub boost_factor_min: f64,
    pub boost_factor_max: f64,

    // === Spawns after eating ===
    pub obstacle_spawn_chance: f64,
    pub power_up_spawn_chance: f64,
    pub speed_boost_spawn_chance: f64,

    /// Random placement retries before falling back to the origin cell
    pub sample_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            grid_size: 20,

            start_interval_ms: 140,
            min_interval_ms: 70,
            interval_step_ms: 6,
            points_per_level: 60,

            initial_obstacles: 6,
            initial_power_ups: 2,
            initial_speed_boosts: 2,

            food_score: 10,
            grow_score: 15,
            boost_score: 8,

            grow_segments: 3,
            invincible_ms: 8000.0,
            boost_duration_ms: 7000.0,
            boost_factor_min: 1.6,
            boost_factor_max: 3.2,

            obstacle_spawn_chance: 0.35,
            power_up_spawn_chance: 0.4,
            speed_boost_spawn_chance: 0.35,

            sample_attempts: 2000,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.grid_size < 2 {
            return Err(TuningError::Invalid("grid_size must be at least 2"));
        }
        if self.min_interval_ms == 0 {
            return Err(TuningError::Invalid("min_interval_ms must be positive"));
        }
        if self.start_interval_ms < self.min_interval_ms {
            return Err(TuningError::Invalid(
                "start_interval_ms must not be below min_interval_ms",
            ));
        }
        if self.points_per_level == 0 {
            return Err(TuningError::Invalid("points_per_level must be positive"));
        }
        if !(self.boost_factor_min > 0.0 && self.boost_factor_min < self.boost_factor_max) {
            return Err(TuningError::Invalid(
                "boost factor range must be positive and non-empty",
            ));
        }
        let chances = [
            self.obstacle_spawn_chance,
            self.power_up_spawn_chance,
            self.speed_boost_spawn_chance,
        ];
        if chances.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(TuningError::Invalid("spawn chances must lie in [0, 1]"));
        }
        if self.invincible_ms < 0.0 || self.boost_duration_ms < 0.0 {
            return Err(TuningError::Invalid("durations must not be negative"));
        }
        if self.sample_attempts == 0 {
            return Err(TuningError::Invalid("sample_attempts must be positive"));
        }
        Ok(())
    }

    /// Cell the snake starts on (9,9 on the default board)
    pub fn start_cell(&self) -> crate::sim::Cell {
        let mid = self.grid_size / 2 - 1;
        crate::sim::Cell::new(mid.max(0), mid.max(0))
    }
}
