//! Friends Snake - grid snake with power-ups, speed boosts and obstacles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, entities, tick, difficulty)
//! - `session`: Frame scheduler and input application
//! - `renderer`: Canvas 2D draw lists
//! - `audio`, `offline`: Browser collaborators
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod autopilot;
pub mod hud;
pub mod input;
pub mod offline;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use hud::HudSnapshot;
pub use input::InputAction;
pub use session::Session;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Platform constants
pub mod consts {
    /// Canvas edge length in CSS pixels
    pub const CANVAS_SIZE_PX: u32 = 480;
    /// Game-over flash duration
    pub const GAME_OVER_FLASH_MS: i32 = 160;
    /// Simulated frame length for headless runs (60 fps)
    pub const HEADLESS_FRAME_MS: f64 = 1000.0 / 60.0;
}
