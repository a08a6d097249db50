//! Demo mode - the game plays itself
//!
//! Greedy one-step lookahead: never turn into a lethal cell if a safe one
//! exists, and among safe moves take the one closest to the food.

use crate::sim::{Cell, Direction, GameState};

/// Pick a direction for the next tick, or `None` to keep going straight
pub fn choose_direction(state: &GameState) -> Option<Direction> {
    let grid_size = state.tuning.grid_size;
    let head = state.head();
    let target = target_cell(state);

    let reverse = state.heading.map(|d| d.opposite());
    let candidates = Direction::ALL.into_iter().filter(|&d| Some(d) != reverse);

    let best = candidates
        .filter(|&d| is_safe(state, head.step(d, grid_size)))
        .min_by_key(|&d| {
            let next = head.step(d, grid_size);
            let distance = target.map_or(0, |t| next.torus_distance(t, grid_size));
            // Prefer holding course on ties to avoid zig-zagging
            (distance, Some(d) != state.heading)
        });

    // Nothing safe: keep heading and accept fate
    best.or(state.heading)
}

/// Food first, otherwise the nearest power-up
fn target_cell(state: &GameState) -> Option<Cell> {
    if let Some(food) = state.registry.food {
        return Some(food);
    }
    let grid_size = state.tuning.grid_size;
    let head = state.head();
    state
        .registry
        .power_ups
        .iter()
        .map(|p| p.cell)
        .min_by_key(|c| head.torus_distance(*c, grid_size))
}

fn is_safe(state: &GameState, cell: Cell) -> bool {
    state.is_invincible()
        || !(state.snake.contains_body_collision(cell) || state.registry.has_obstacle_at(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ActivePower, GameEvent, PowerKind, tick};

    fn empty_board() -> GameState {
        let mut state = GameState::new(8);
        state.registry.clear();
        state
    }

    #[test]
    fn test_heads_for_food() {
        let mut state = empty_board();
        state.registry.food = Some(Cell::new(9, 3));
        assert_eq!(choose_direction(&state), Some(Direction::Up));

        state.registry.food = Some(Cell::new(15, 9));
        assert_eq!(choose_direction(&state), Some(Direction::Right));
    }

    #[test]
    fn test_steers_around_obstacle() {
        let mut state = empty_board();
        state.heading = Some(Direction::Right);
        state.registry.food = Some(Cell::new(15, 9));
        state.registry.obstacles.push(Cell::new(10, 9));

        let dir = choose_direction(&state).unwrap();
        assert!(dir == Direction::Up || dir == Direction::Down);
    }

    #[test]
    fn test_ignores_obstacles_when_invincible() {
        let mut state = empty_board();
        state.heading = Some(Direction::Right);
        state.registry.food = Some(Cell::new(15, 9));
        state.registry.obstacles.push(Cell::new(10, 9));
        state.active_power = Some(ActivePower {
            kind: PowerKind::Invincible,
            remaining_ms: 1000.0,
        });
        assert_eq!(choose_direction(&state), Some(Direction::Right));
    }

    #[test]
    fn test_never_reverses() {
        let mut state = empty_board();
        state.heading = Some(Direction::Right);
        state.registry.food = Some(Cell::new(3, 9));
        assert_ne!(choose_direction(&state), Some(Direction::Left));
    }

    #[test]
    fn test_eats_on_open_board() {
        let mut state = empty_board();
        state.registry.food = Some(Cell::new(14, 12));
        for _ in 0..20 {
            if let Some(dir) = choose_direction(&state) {
                state.queue_direction(dir);
            }
            tick(&mut state);
        }
        assert!(state.score >= 10);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }))
        );
    }
}
