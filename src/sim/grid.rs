//! Toroidal grid geometry
//!
//! The board is a square of `grid_size × grid_size` cells. Leaving one edge
//! re-enters at the opposite edge, so every coordinate produced by a move is
//! folded back into `[0, grid_size)` instead of being rejected.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Fold a coordinate back onto the board
#[inline]
pub fn wrap(coord: i32, grid_size: i32) -> i32 {
    coord.rem_euclid(grid_size)
}

/// Shortest distance between two coordinates on a ring of `grid_size`
#[inline]
fn ring_distance(a: i32, b: i32, grid_size: i32) -> i32 {
    let d = wrap(a - b, grid_size);
    d.min(grid_size - d)
}

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Top-left cell, also the fallback when random placement gives up
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`, wrapped onto the board
    pub fn step(self, dir: Direction, grid_size: i32) -> Cell {
        let d = dir.delta();
        Cell::new(wrap(self.x + d.x, grid_size), wrap(self.y + d.y, grid_size))
    }

    /// Manhattan distance measured around the torus
    pub fn torus_distance(self, other: Cell, grid_size: i32) -> i32 {
        ring_distance(self.x, other.x, grid_size) + ring_distance(self.y, other.y, grid_size)
    }

    #[inline]
    pub fn in_bounds(self, grid_size: i32) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.y)
    }
}

/// Cardinal movement direction (screen space, +y is down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector for this direction
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse a touch-control name (`up`, `down`, `left`, `right`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_edges() {
        assert_eq!(wrap(-1, 20), 19);
        assert_eq!(wrap(20, 20), 0);
        assert_eq!(wrap(7, 20), 7);
        assert_eq!(wrap(-41, 20), 19);
    }

    #[test]
    fn test_step_wraps_around() {
        assert_eq!(Cell::new(19, 5).step(Direction::Right, 20), Cell::new(0, 5));
        assert_eq!(Cell::new(0, 5).step(Direction::Left, 20), Cell::new(19, 5));
        assert_eq!(Cell::new(3, 0).step(Direction::Up, 20), Cell::new(3, 19));
        assert_eq!(Cell::new(3, 19).step(Direction::Down, 20), Cell::new(3, 0));
    }

    #[test]
    fn test_opposites_cancel() {
        for dir in Direction::ALL {
            assert_eq!(dir.delta() + dir.opposite().delta(), IVec2::ZERO);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_torus_distance_takes_short_way() {
        let a = Cell::new(0, 0);
        let b = Cell::new(19, 18);
        assert_eq!(a.torus_distance(b, 20), 3);
        assert_eq!(b.torus_distance(a, 20), 3);
    }

    #[test]
    fn test_direction_names_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_name(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_name("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_name("diagonal"), None);
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_step_stays_on_board(
            grid in 2i32..64,
            x in 0i32..64,
            y in 0i32..64,
            dir in any_direction(),
        ) {
            let cell = Cell::new(wrap(x, grid), wrap(y, grid));
            let next = cell.step(dir, grid);
            prop_assert!(next.in_bounds(grid));
            prop_assert_eq!(cell.torus_distance(next, grid), 1);
        }
    }
}
