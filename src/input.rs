//! Input routing
//!
//! Maps raw keyboard keys and touch-button names to game actions. Actions
//! only stage intent; the session applies them between ticks.

use crate::sim::Direction;

/// Everything the player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Turn on the next tick
    Steer(Direction),
    /// Pause / resume
    TogglePause,
    /// Start over with a fresh board
    Reset,
    ToggleMusic,
    /// Let the demo autopilot drive
    ToggleAutopilot,
}

/// Map a `KeyboardEvent.key` value to an action
pub fn action_for_key(key: &str) -> Option<InputAction> {
    let action = match key {
        "ArrowUp" | "w" | "W" => InputAction::Steer(Direction::Up),
        "ArrowDown" | "s" | "S" => InputAction::Steer(Direction::Down),
        "ArrowLeft" | "a" | "A" => InputAction::Steer(Direction::Left),
        "ArrowRight" | "d" | "D" => InputAction::Steer(Direction::Right),
        " " => InputAction::TogglePause,
        "r" | "R" => InputAction::Reset,
        "m" | "M" => InputAction::ToggleMusic,
        "i" | "I" => InputAction::ToggleAutopilot,
        _ => return None,
    };
    Some(action)
}

/// Map a touch button's `data-dir` value to an action
pub fn action_for_touch(dir: &str) -> Option<InputAction> {
    Direction::from_name(dir).map(InputAction::Steer)
}
