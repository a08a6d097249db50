//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Wall time only enters through `GameState::advance_clock`
//! - No rendering or platform dependencies

pub mod difficulty;
pub mod grid;
pub mod registry;
pub mod snake;
pub mod state;
pub mod tick;

pub use difficulty::{base_interval_ms, decay_power, tick_interval_ms};
pub use grid::{Cell, Direction, wrap};
pub use registry::{PowerUp, PowerUpKind, Registry, SpeedBoost};
pub use snake::Snake;
pub use state::{
    ActivePower, BoostExpiry, CollisionKind, GameEvent, GamePhase, GameState, PowerKind,
};
pub use tick::tick;
