//! Snake body
//!
//! Segments are stored head-first. The snake is never empty.

use std::collections::VecDeque;

use super::grid::{Cell, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Cell>,
}

impl Snake {
    /// A single-segment snake sitting on `head`
    pub fn new(head: Cell) -> Self {
        let mut segments = VecDeque::with_capacity(16);
        segments.push_back(head);
        Self { segments }
    }

    /// Build a snake from explicit segments (head first). Empty input yields
    /// a snake on the origin cell.
    pub fn from_segments(cells: impl IntoIterator<Item = Cell>) -> Self {
        let segments: VecDeque<Cell> = cells.into_iter().collect();
        if segments.is_empty() {
            return Self::new(Cell::ORIGIN);
        }
        Self { segments }
    }

    #[inline]
    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    #[inline]
    pub fn tail(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments head-first
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = Cell> + ExactSizeIterator + '_ {
        self.segments.iter().copied()
    }

    /// Move the head one cell in `dir`, prepending the new head.
    /// Returns the new head. The tail is left alone.
    pub fn advance(&mut self, dir: Direction, grid_size: i32) -> Cell {
        let head = self.head().step(dir, grid_size);
        self.segments.push_front(head);
        head
    }

    /// Append `n` copies of the tail cell. Stacked segments unfold as the
    /// snake moves on.
    pub fn grow(&mut self, n: usize) {
        let tail = self.tail();
        self.segments.extend(std::iter::repeat_n(tail, n));
    }

    /// Drop the last segment after a move that did not eat
    pub fn shrink_to_move(&mut self) {
        if self.segments.len() > 1 {
            self.segments.pop_back();
        }
    }

    /// True if `cell` lies on any segment except the head
    pub fn contains_body_collision(&self, cell: Cell) -> bool {
        self.segments.iter().skip(1).any(|&s| s == cell)
    }

    /// True if any segment, head included, lies on `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_then_shrink_keeps_length() {
        let mut snake = Snake::new(Cell::new(9, 9));
        let head = snake.advance(Direction::Right, 20);
        snake.shrink_to_move();
        assert_eq!(head, Cell::new(10, 9));
        assert_eq!(snake.segments().collect::<Vec<_>>(), vec![Cell::new(10, 9)]);
    }

    #[test]
    fn test_advance_wraps() {
        let mut snake = Snake::new(Cell::new(0, 0));
        snake.advance(Direction::Up, 20);
        assert_eq!(snake.head(), Cell::new(0, 19));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_grow_stacks_tail() {
        let mut snake = Snake::from_segments([Cell::new(5, 5), Cell::new(4, 5)]);
        snake.grow(3);
        assert_eq!(snake.len(), 5);
        assert!(snake.segments().skip(1).all(|c| c == Cell::new(4, 5)));

        // Stacked segments unfold one per move
        for _ in 0..3 {
            snake.advance(Direction::Right, 20);
            snake.shrink_to_move();
        }
        let cells: Vec<_> = snake.segments().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(8, 5),
                Cell::new(7, 5),
                Cell::new(6, 5),
                Cell::new(5, 5),
                Cell::new(4, 5),
            ]
        );
    }

    #[test]
    fn test_body_collision_ignores_head() {
        let snake = Snake::from_segments([Cell::new(2, 2), Cell::new(1, 2), Cell::new(1, 1)]);
        assert!(!snake.contains_body_collision(Cell::new(2, 2)));
        assert!(snake.contains_body_collision(Cell::new(1, 2)));
        assert!(snake.contains_body_collision(Cell::new(1, 1)));
        assert!(snake.occupies(Cell::new(2, 2)));
    }

    #[test]
    fn test_shrink_never_empties() {
        let mut snake = Snake::new(Cell::new(3, 3));
        snake.shrink_to_move();
        assert_eq!(snake.len(), 1);
        assert_eq!(Snake::from_segments([]).head(), Cell::ORIGIN);
    }
}
