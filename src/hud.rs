//! HUD text
//!
//! Read-only projection of the game state into the strings shown next to
//! the canvas.

use serde::Serialize;

use crate::sim::GameState;

/// Shown when no power is active
pub const NO_POWER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    pub score: String,
    /// Speed multiplier with two decimals
    pub speed: String,
    /// Active power with whole seconds left (rounded up), or `NO_POWER`
    pub power: String,
    /// Label for the pause button
    pub pause_label: &'static str,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let power = match state.active_power {
            Some(p) => format!(
                "{} ({}s)",
                p.kind.as_str(),
                (p.remaining_ms / 1000.0).ceil().max(0.0) as u64
            ),
            None => NO_POWER.to_string(),
        };

        Self {
            score: state.score.to_string(),
            speed: format!("{:.2}", state.speed_multiplier),
            power,
            pause_label: if state.is_running() { "Pause" } else { "Resume" },
        }
    }
}

/// Label for the music toggle button
pub fn music_label(enabled: bool) -> &'static str {
    if enabled {
        "🔊 Music: On"
    } else {
        "🔇 Music: Off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ActivePower, PowerKind};

    #[test]
    fn test_fresh_game_hud() {
        let state = GameState::new(1);
        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.score, "0");
        assert_eq!(hud.speed, "1.00");
        assert_eq!(hud.power, NO_POWER);
        assert_eq!(hud.pause_label, "Pause");
    }

    #[test]
    fn test_power_seconds_round_up() {
        let mut state = GameState::new(1);
        state.score = 48;
        state.speed_multiplier = 2.346;
        state.active_power = Some(ActivePower {
            kind: PowerKind::Invincible,
            remaining_ms: 7001.0,
        });
        state.toggle_running();

        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.score, "48");
        assert_eq!(hud.speed, "2.35");
        assert_eq!(hud.power, "invincible (8s)");
        assert_eq!(hud.pause_label, "Resume");
    }

    #[test]
    fn test_music_label() {
        assert!(music_label(true).ends_with("On"));
        assert!(music_label(false).ends_with("Off"));
    }
}
