//! Board entities: food, obstacles, power-ups and speed boosts
//!
//! Each entity is a cell plus its metadata. Placement samples random cells
//! until it finds one that nothing occupies.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Cell;
use super::snake::Snake;
use crate::tuning::Tuning;

/// Power-up variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Adds tail segments and bonus points
    Grow,
    /// Temporarily ignore self and obstacle collisions
    Invincible,
}

impl PowerUpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Grow => "grow",
            PowerUpKind::Invincible => "invincible",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub cell: Cell,
    pub kind: PowerUpKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBoost {
    pub cell: Cell,
    /// Multiplier applied to the game speed while the boost lasts
    pub factor: f64,
}

/// All non-snake entities on the board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    pub food: Option<Cell>,
    pub obstacles: Vec<Cell>,
    pub power_ups: Vec<PowerUp>,
    pub speed_boosts: Vec<SpeedBoost>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entity
    pub fn clear(&mut self) {
        self.food = None;
        self.obstacles.clear();
        self.power_ups.clear();
        self.speed_boosts.clear();
    }

    pub fn has_obstacle_at(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell)
    }

    pub fn has_food_at(&self, cell: Cell) -> bool {
        self.food == Some(cell)
    }

    /// True if the snake or any entity sits on `cell`
    pub fn is_occupied(&self, snake: &Snake, cell: Cell) -> bool {
        snake.occupies(cell)
            || self.has_food_at(cell)
            || self.has_obstacle_at(cell)
            || self.power_ups.iter().any(|p| p.cell == cell)
            || self.speed_boosts.iter().any(|s| s.cell == cell)
    }

    /// Pick a random unoccupied cell. Gives up after `sample_attempts`
    /// tries and returns the origin cell, which only happens on a
    /// (nearly) full board.
    pub fn sample_empty_cell<R: Rng + ?Sized>(
        &self,
        snake: &Snake,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Cell {
        for _ in 0..tuning.sample_attempts {
            let cell = Cell::new(
                rng.random_range(0..tuning.grid_size),
                rng.random_range(0..tuning.grid_size),
            );
            if !self.is_occupied(snake, cell) {
                return cell;
            }
        }
        log::warn!(
            "No empty cell after {} attempts, falling back to origin",
            tuning.sample_attempts
        );
        Cell::ORIGIN
    }

    /// Move the food to a fresh empty cell
    pub fn place_food<R: Rng + ?Sized>(
        &mut self,
        snake: &Snake,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Cell {
        let cell = self.sample_empty_cell(snake, tuning, rng);
        self.food = Some(cell);
        cell
    }

    pub fn spawn_obstacles<R: Rng + ?Sized>(
        &mut self,
        n: usize,
        snake: &Snake,
        tuning: &Tuning,
        rng: &mut R,
    ) {
        for _ in 0..n {
            let cell = self.sample_empty_cell(snake, tuning, rng);
            self.obstacles.push(cell);
        }
    }

    /// Spawn `n` power-ups, each Grow or Invincible with equal odds
    pub fn spawn_power_ups<R: Rng + ?Sized>(
        &mut self,
        n: usize,
        snake: &Snake,
        tuning: &Tuning,
        rng: &mut R,
    ) {
        for _ in 0..n {
            let cell = self.sample_empty_cell(snake, tuning, rng);
            let kind = if rng.random_bool(0.5) {
                PowerUpKind::Grow
            } else {
                PowerUpKind::Invincible
            };
            self.power_ups.push(PowerUp { cell, kind });
        }
    }

    /// Spawn `n` speed boosts with factors drawn uniformly from the tuning range
    pub fn spawn_speed_boosts<R: Rng + ?Sized>(
        &mut self,
        n: usize,
        snake: &Snake,
        tuning: &Tuning,
        rng: &mut R,
    ) {
        for _ in 0..n {
            let cell = self.sample_empty_cell(snake, tuning, rng);
            let factor = rng.random_range(tuning.boost_factor_min..tuning.boost_factor_max);
            self.speed_boosts.push(SpeedBoost { cell, factor });
        }
    }

    /// Remove and return the first power-up on `cell`
    pub fn take_power_up_at(&mut self, cell: Cell) -> Option<PowerUp> {
        let idx = self.power_ups.iter().position(|p| p.cell == cell)?;
        Some(self.power_ups.remove(idx))
    }

    /// Remove and return the first speed boost on `cell`
    pub fn take_speed_boost_at(&mut self, cell: Cell) -> Option<SpeedBoost> {
        let idx = self.speed_boosts.iter().position(|s| s.cell == cell)?;
        Some(self.speed_boosts.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn small_tuning(grid_size: i32) -> Tuning {
        Tuning {
            grid_size,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_sample_avoids_everything() {
        let tuning = small_tuning(3);
        let mut rng = Pcg32::seed_from_u64(7);
        let snake = Snake::from_segments([Cell::new(0, 0), Cell::new(1, 0)]);
        let mut registry = Registry::new();
        registry.food = Some(Cell::new(2, 0));
        registry.obstacles = vec![Cell::new(0, 1), Cell::new(1, 1)];
        registry.power_ups.push(PowerUp {
            cell: Cell::new(2, 1),
            kind: PowerUpKind::Grow,
        });
        registry.speed_boosts.push(SpeedBoost {
            cell: Cell::new(0, 2),
            factor: 2.0,
        });

        for _ in 0..50 {
            let cell = registry.sample_empty_cell(&snake, &tuning, &mut rng);
            assert!(cell == Cell::new(1, 2) || cell == Cell::new(2, 2));
        }
    }

    #[test]
    fn test_full_board_falls_back_to_origin() {
        let tuning = Tuning {
            sample_attempts: 50,
            ..small_tuning(2)
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let snake = Snake::from_segments([Cell::new(1, 1), Cell::new(1, 0)]);
        let mut registry = Registry::new();
        registry.obstacles = vec![Cell::new(0, 0), Cell::new(0, 1)];

        assert_eq!(registry.sample_empty_cell(&snake, &tuning, &mut rng), Cell::ORIGIN);
    }

    #[test]
    fn test_spawns_append_and_stay_in_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let snake = Snake::new(tuning.start_cell());
        let mut registry = Registry::new();

        registry.spawn_obstacles(5, &snake, &tuning, &mut rng);
        registry.spawn_power_ups(40, &snake, &tuning, &mut rng);
        registry.spawn_speed_boosts(40, &snake, &tuning, &mut rng);

        assert_eq!(registry.obstacles.len(), 5);
        assert_eq!(registry.power_ups.len(), 40);
        assert_eq!(registry.speed_boosts.len(), 40);
        assert!(registry.power_ups.iter().any(|p| p.kind == PowerUpKind::Grow));
        assert!(registry.power_ups.iter().any(|p| p.kind == PowerUpKind::Invincible));
        for boost in &registry.speed_boosts {
            assert!(boost.factor >= 1.6 && boost.factor < 3.2);
        }

        // No two entities share a cell
        let mut cells: Vec<Cell> = registry.obstacles.clone();
        cells.extend(registry.power_ups.iter().map(|p| p.cell));
        cells.extend(registry.speed_boosts.iter().map(|s| s.cell));
        let total = cells.len();
        cells.sort_by_key(|c| (c.x, c.y));
        cells.dedup();
        assert_eq!(cells.len(), total);
        assert!(!cells.contains(&snake.head()));
    }

    #[test]
    fn test_take_removes_only_first_match() {
        let cell = Cell::new(4, 4);
        let mut registry = Registry::new();
        registry.speed_boosts = vec![
            SpeedBoost { cell, factor: 2.0 },
            SpeedBoost { cell: Cell::new(1, 1), factor: 1.7 },
            SpeedBoost { cell, factor: 3.0 },
        ];

        let taken = registry.take_speed_boost_at(cell).unwrap();
        assert_eq!(taken.factor, 2.0);
        assert_eq!(registry.speed_boosts.len(), 2);
        assert_eq!(registry.speed_boosts[1].factor, 3.0);
        assert!(registry.take_power_up_at(cell).is_none());
    }
}
