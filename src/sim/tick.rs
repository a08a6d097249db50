//! Simulation step
//!
//! One tick moves the snake exactly one cell and resolves everything that
//! move touches: collisions, food, power-ups, speed boosts and the
//! difficulty curve.

use rand::Rng;

use super::difficulty;
use super::registry::PowerUpKind;
use super::state::{ActivePower, CollisionKind, GameEvent, GameState, PowerKind};

/// Advance the game by one step. No-op while Idle.
pub fn tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    // Commit the staged direction unless it reverses straight back
    if let Some(next) = state.pending_direction.take() {
        if state.heading.map(|d| d.opposite()) != Some(next) {
            state.heading = Some(next);
        }
    }

    // Snake sits still until the first direction input
    let Some(dir) = state.heading else {
        return;
    };

    state.time_ticks += 1;
    let grid_size = state.tuning.grid_size;
    let candidate = state.snake.head().step(dir, grid_size);

    // Self first, then obstacles
    let collision = if state.snake.contains_body_collision(candidate) {
        Some(CollisionKind::SelfBody)
    } else if state.registry.has_obstacle_at(candidate) {
        Some(CollisionKind::Obstacle)
    } else {
        None
    };
    if let Some(cause) = collision {
        if !state.is_invincible() {
            log::info!(
                "Game over ({:?}) at score {} after {} ticks (seed {})",
                cause,
                state.score,
                state.time_ticks,
                state.seed
            );
            state.push_event(GameEvent::GameOver {
                cause,
                score: state.score,
            });
            state.reset();
            return;
        }
    }

    let head = state.snake.advance(dir, grid_size);

    if state.registry.has_food_at(head) {
        eat_food(state);
    } else {
        state.snake.shrink_to_move();
    }

    collect_power_up(state);
    collect_speed_boost(state);
    update_difficulty(state);
}

fn eat_food(state: &mut GameState) {
    let tuning = &state.tuning;
    state.score += tuning.food_score;
    state
        .registry
        .place_food(&state.snake, tuning, &mut state.rng);

    if state.rng.random_bool(tuning.obstacle_spawn_chance) {
        state
            .registry
            .spawn_obstacles(1, &state.snake, tuning, &mut state.rng);
    }
    if state.rng.random_bool(tuning.power_up_spawn_chance) {
        state
            .registry
            .spawn_power_ups(1, &state.snake, tuning, &mut state.rng);
    }
    if state.rng.random_bool(tuning.speed_boost_spawn_chance) {
        state
            .registry
            .spawn_speed_boosts(1, &state.snake, tuning, &mut state.rng);
    }

    state.push_event(GameEvent::FoodEaten { score: state.score });
}

fn collect_power_up(state: &mut GameState) {
    let Some(power_up) = state.registry.take_power_up_at(state.snake.head()) else {
        return;
    };

    match power_up.kind {
        PowerUpKind::Grow => {
            state.snake.grow(state.tuning.grow_segments);
            state.score += state.tuning.grow_score;
        }
        PowerUpKind::Invincible => {
            // A second pickup restarts the timer
            state.active_power = Some(ActivePower {
                kind: PowerKind::Invincible,
                remaining_ms: state.tuning.invincible_ms,
            });
        }
    }
    log::debug!("Collected {} power-up", power_up.kind.as_str());
    state.push_event(GameEvent::PowerUpCollected(power_up.kind));
}

fn collect_speed_boost(state: &mut GameState) {
    let Some(boost) = state.registry.take_speed_boost_at(state.snake.head()) else {
        return;
    };

    state.apply_speed_boost(boost.factor);
    state.score += state.tuning.boost_score;
    log::debug!(
        "Speed boost x{:.2}, speed now x{:.2}",
        boost.factor,
        state.speed_multiplier
    );
    state.push_event(GameEvent::SpeedBoostCollected {
        factor: boost.factor,
    });
}

/// Burn one tick's worth of real time off the active power, then recompute
/// the base interval from the score.
fn update_difficulty(state: &mut GameState) {
    let elapsed = state.tick_interval_ms();
    if let Some(kind) = difficulty::decay_power(&mut state.active_power, elapsed) {
        log::debug!("{} wore off", kind.as_str());
        state.push_event(GameEvent::PowerExpired(kind));
    }
    state.base_interval_ms = difficulty::base_interval_ms(state.score, &state.tuning);
}
