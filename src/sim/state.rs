//! Game state and core simulation types
//!
//! One `GameState` is one game. Reset replaces it wholesale, so nothing from
//! a finished game (entities, pending boost expiries) leaks into the next.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty;
use super::grid::{Cell, Direction};
use super::registry::{PowerUpKind, Registry};
use super::snake::Snake;
use crate::tuning::Tuning;

/// Whether ticks advance the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Paused; ticks are no-ops
    Idle,
}

/// Timed power states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerKind {
    Invincible,
}

impl PowerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerKind::Invincible => "invincible",
        }
    }
}

/// The currently active power and how long it has left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePower {
    pub kind: PowerKind,
    pub remaining_ms: f64,
}

/// A speed boost waiting to be undone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostExpiry {
    /// Exact factor that was multiplied in at pickup
    pub factor: f64,
    /// Wall-clock time (`GameState::elapsed_ms`) at which it ends
    pub due_ms: f64,
}

/// What killed the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    SelfBody,
    Obstacle,
}

/// Notable things that happened during a tick or clock advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    FoodEaten { score: u64 },
    PowerUpCollected(PowerUpKind),
    PowerExpired(PowerKind),
    SpeedBoostCollected { factor: f64 },
    SpeedBoostExpired { factor: f64 },
    /// The snake crashed; the board has already been reset
    GameOver { cause: CollisionKind, score: u64 },
    /// Explicit reset requested by the player
    Reset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this game was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub snake: Snake,
    pub registry: Registry,
    /// Direction of travel; `None` until the first input
    pub heading: Option<Direction>,
    /// Latest unconsumed direction input (last writer wins)
    pub pending_direction: Option<Direction>,
    pub score: u64,
    pub speed_multiplier: f64,
    /// Step interval at speed 1 (ms)
    pub base_interval_ms: u32,
    pub active_power: Option<ActivePower>,
    /// Wall clock since this game started (ms)
    pub elapsed_ms: f64,
    /// Speed boosts still in effect
    pub boost_expiries: Vec<BoostExpiry>,
    /// Ticks simulated in this game
    pub time_ticks: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = Snake::new(tuning.start_cell());
        let mut registry = Registry::new();

        registry.place_food(&snake, &tuning, &mut rng);
        registry.spawn_obstacles(tuning.initial_obstacles, &snake, &tuning, &mut rng);
        registry.spawn_power_ups(tuning.initial_power_ups, &snake, &tuning, &mut rng);
        registry.spawn_speed_boosts(tuning.initial_speed_boosts, &snake, &tuning, &mut rng);

        Self {
            seed,
            base_interval_ms: difficulty::base_interval_ms(0, &tuning),
            tuning,
            rng,
            phase: GamePhase::Running,
            snake,
            registry,
            heading: None,
            pending_direction: None,
            score: 0,
            speed_multiplier: 1.0,
            active_power: None,
            elapsed_ms: 0.0,
            boost_expiries: Vec::new(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Start a fresh game. The next seed comes from this game's RNG so a
    /// whole session replays from its first seed. Phase and queued events
    /// survive; pending boost expiries do not.
    pub fn reset(&mut self) {
        let seed = self.rng.random::<u64>();
        let phase = self.phase;
        let events = std::mem::take(&mut self.events);
        let tuning = self.tuning.clone();

        *self = Self::with_tuning(seed, tuning);
        self.phase = phase;
        self.events = events;
        log::info!("Board reset (seed {})", seed);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Flip between Running and Idle
    pub fn toggle_running(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Idle,
            GamePhase::Idle => GamePhase::Running,
        };
        log::debug!("Phase -> {:?}", self.phase);
    }

    /// Stage a direction for the next tick, replacing any unconsumed one
    pub fn queue_direction(&mut self, dir: Direction) {
        self.pending_direction = Some(dir);
    }

    pub fn is_invincible(&self) -> bool {
        matches!(
            self.active_power,
            Some(ActivePower {
                kind: PowerKind::Invincible,
                ..
            })
        )
    }

    /// Real time between ticks at the current speed (ms)
    pub fn tick_interval_ms(&self) -> f64 {
        difficulty::tick_interval_ms(self.base_interval_ms, self.speed_multiplier)
    }

    pub fn head(&self) -> Cell {
        self.snake.head()
    }

    /// Multiply a boost into the speed and schedule its reversal
    pub fn apply_speed_boost(&mut self, factor: f64) {
        self.speed_multiplier *= factor;
        self.boost_expiries.push(BoostExpiry {
            factor,
            due_ms: self.elapsed_ms + self.tuning.boost_duration_ms,
        });
    }

    /// Advance the wall clock and undo every boost that has run out.
    /// Runs regardless of phase.
    pub fn advance_clock(&mut self, dt_ms: f64) {
        self.elapsed_ms += dt_ms.max(0.0);
        let now = self.elapsed_ms;

        let mut i = 0;
        while i < self.boost_expiries.len() {
            if self.boost_expiries[i].due_ms <= now {
                let expiry = self.boost_expiries.remove(i);
                self.speed_multiplier /= expiry.factor;
                log::debug!(
                    "Speed boost x{:.2} expired, speed now x{:.2}",
                    expiry.factor,
                    self.speed_multiplier
                );
                self.push_event(GameEvent::SpeedBoostExpired {
                    factor: expiry.factor,
                });
            } else {
                i += 1;
            }
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(12345);
        assert_eq!(state.snake.segments().collect::<Vec<_>>(), vec![Cell::new(9, 9)]);
        assert_eq!(state.registry.obstacles.len(), 6);
        assert_eq!(state.registry.power_ups.len(), 2);
        assert_eq!(state.registry.speed_boosts.len(), 2);
        assert!(state.registry.food.is_some());
        assert_eq!(state.score, 0);
        assert_eq!(state.speed_multiplier, 1.0);
        assert_eq!(state.base_interval_ms, 140);
        assert_eq!(state.heading, None);
        assert!(state.is_running());
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        assert_eq!(a.registry, b.registry);
    }

    #[test]
    fn test_boost_expires_after_duration() {
        let mut state = GameState::new(1);
        state.apply_speed_boost(2.0);
        assert_eq!(state.speed_multiplier, 2.0);

        state.advance_clock(6999.0);
        assert_eq!(state.speed_multiplier, 2.0);

        state.advance_clock(1.0);
        assert_eq!(state.speed_multiplier, 1.0);
        assert!(state.boost_expiries.is_empty());
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::SpeedBoostExpired { factor: 2.0 }]
        );
    }

    #[test]
    fn test_overlapping_boosts_unwind_independently() {
        let mut state = GameState::new(1);
        state.apply_speed_boost(2.0);
        state.advance_clock(3000.0);
        state.apply_speed_boost(1.5);
        assert!((state.speed_multiplier - 3.0).abs() < 1e-9);

        state.advance_clock(4000.0);
        assert!((state.speed_multiplier - 1.5).abs() < 1e-9);

        state.advance_clock(3000.0);
        assert!((state.speed_multiplier - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_reseeds_deterministically() {
        let mut a = GameState::new(77);
        let mut b = GameState::new(77);
        a.reset();
        b.reset();
        assert_eq!(a.seed, b.seed);
        assert_ne!(a.seed, 77);
        assert_eq!(a.registry, b.registry);
    }

    #[test]
    fn test_reset_drops_pending_boosts_and_keeps_phase() {
        let mut state = GameState::new(5);
        state.apply_speed_boost(2.5);
        state.score = 120;
        state.toggle_running();
        state.push_event(GameEvent::Reset);

        state.reset();
        assert_eq!(state.speed_multiplier, 1.0);
        assert!(state.boost_expiries.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.drain_events(), vec![GameEvent::Reset]);

        // The stale boost never comes back to divide the new game's speed
        state.advance_clock(10_000.0);
        assert_eq!(state.speed_multiplier, 1.0);
    }

    #[test]
    fn test_toggle_and_queue() {
        let mut state = GameState::new(3);
        state.toggle_running();
        assert!(!state.is_running());
        state.toggle_running();
        assert!(state.is_running());

        state.queue_direction(Direction::Up);
        state.queue_direction(Direction::Left);
        assert_eq!(state.pending_direction, Some(Direction::Left));
    }
}
