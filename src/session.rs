//! Frame-driven session
//!
//! Owns the one live `GameState` and is its only writer. The platform layer
//! calls `frame` once per animation frame with a monotonic timestamp and
//! `apply` between frames for player input.

use crate::autopilot;
use crate::input::InputAction;
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Tuning;

/// Decides when the next tick is due
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_frame_ms: Option<f64>,
    last_tick_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the previous frame (0 on the first frame)
    pub fn frame_delta(&mut self, now_ms: f64) -> f64 {
        let dt = self.last_frame_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_frame_ms = Some(now_ms);
        dt
    }

    /// True at most once per `interval_ms` of real time
    pub fn tick_due(&mut self, now_ms: f64, interval_ms: f64) -> bool {
        let last = *self.last_tick_ms.get_or_insert(now_ms);
        if now_ms - last >= interval_ms {
            self.last_tick_ms = Some(now_ms);
            true
        } else {
            false
        }
    }
}

pub struct Session {
    pub state: GameState,
    clock: FrameClock,
    /// Demo mode: the autopilot steers before every tick
    pub autopilot: bool,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            clock: FrameClock::new(),
            autopilot: false,
        }
    }

    /// Apply a player action. Never touches the snake or board directly
    /// except for an explicit reset. Music is the platform's concern and is
    /// ignored here.
    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Steer(dir) => self.state.queue_direction(dir),
            InputAction::TogglePause => self.state.toggle_running(),
            InputAction::Reset => {
                self.state.push_event(GameEvent::Reset);
                self.state.reset();
            }
            InputAction::ToggleAutopilot => {
                self.autopilot = !self.autopilot;
                log::info!("Autopilot: {}", self.autopilot);
            }
            InputAction::ToggleMusic => {}
        }
    }

    /// Advance wall time to `now_ms`, run a tick if one is due and return
    /// everything that happened.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let dt = self.clock.frame_delta(now_ms);
        self.state.advance_clock(dt);

        if self.clock.tick_due(now_ms, self.state.tick_interval_ms()) {
            if self.autopilot && self.state.is_running() {
                if let Some(dir) = autopilot::choose_direction(&self.state) {
                    self.state.queue_direction(dir);
                }
            }
            tick(&mut self.state);
        }

        self.state.drain_events()
    }
}
