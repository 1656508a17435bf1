//! The player-controlled snake
//!
//! Body is an ordered chain of cells, head first. Direction changes are
//! buffered in `pending_direction` and only take effect at the next tick
//! boundary, so two key presses inside one tick can't reverse the snake
//! into itself.

use std::collections::{HashSet, VecDeque};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Movement direction (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The 180° turn
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step in cell units
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }
}

/// The snake entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    grid: Grid,
    /// Body cells, head first
    positions: VecDeque<IVec2>,
    /// Target body size
    length: usize,
    /// Authoritative direction for the current tick
    direction: Direction,
    /// Requested direction, applied at the next tick boundary
    pending_direction: Option<Direction>,
    /// Tail cell dropped by the last move (for erasing)
    last_removed: Option<IVec2>,
}

impl Snake {
    /// A fresh one-cell snake at the board center, heading right
    pub fn new(grid: Grid) -> Self {
        let mut snake = Self {
            grid,
            positions: VecDeque::new(),
            length: 1,
            direction: Direction::default(),
            pending_direction: None,
            last_removed: None,
        };
        snake.reset();
        snake
    }

    /// Build a snake from an explicit body (head first).
    ///
    /// `length` is set to the body size.
    pub fn with_body(grid: Grid, body: impl IntoIterator<Item = IVec2>, direction: Direction) -> Self {
        let positions: VecDeque<IVec2> = body.into_iter().collect();
        assert!(!positions.is_empty(), "snake body must have a head");
        Self {
            grid,
            length: positions.len(),
            positions,
            direction,
            pending_direction: None,
            last_removed: None,
        }
    }

    #[inline]
    pub fn head(&self) -> IVec2 {
        self.positions[0]
    }

    pub fn positions(&self) -> &VecDeque<IVec2> {
        &self.positions
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn last_removed(&self) -> Option<IVec2> {
        self.last_removed
    }

    /// Every cell currently covered by the body
    pub fn occupied(&self) -> HashSet<IVec2> {
        self.positions.iter().copied().collect()
    }

    /// Request a turn; reversing onto the current direction is ignored
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            log::trace!("Ignoring reversal {:?} -> {:?}", self.direction, direction);
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Commit the buffered turn (once per tick, before moving)
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Where the head lands on the next move
    pub fn next_head(&self) -> IVec2 {
        let step = self.direction.delta() * self.grid.cell_size;
        self.grid.wrap(self.head() + step)
    }

    /// Advance one cell, wrapping at the board edges.
    ///
    /// Drops the tail only once the body has reached `length`.
    pub fn move_forward(&mut self) {
        let new_head = self.next_head();

        self.positions.push_front(new_head);
        self.last_removed = if self.positions.len() > self.length {
            self.positions.pop_back()
        } else {
            None
        };
    }

    /// Lengthen by one; shows up on the next move
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Head overlaps some other body segment
    pub fn self_collides(&self) -> bool {
        let head = self.head();
        self.positions.iter().skip(1).any(|&p| p == head)
    }

    /// Back to a one-cell snake at the center, heading right
    pub fn reset(&mut self) {
        self.length = 1;
        self.positions.clear();
        self.positions.push_back(self.grid.center());
        self.direction = Direction::default();
        self.pending_direction = None;
        self.last_removed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(640, 480, 20)
    }

    #[test]
    fn test_new_snake() {
        let snake = Snake::new(grid());
        assert_eq!(snake.head(), IVec2::new(320, 240));
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.last_removed(), None);
    }

    #[test]
    fn test_opposites_pair_up() {
        for d in Direction::ALL {
            assert_ne!(d, d.opposite());
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.delta() + d.opposite().delta(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_move_without_growth() {
        let mut snake = Snake::new(grid());
        snake.move_forward();
        assert_eq!(snake.positions().iter().copied().collect::<Vec<_>>(), vec![IVec2::new(340, 240)]);
        assert_eq!(snake.last_removed(), Some(IVec2::new(320, 240)));
    }

    #[test]
    fn test_move_wraps_right_edge() {
        let mut snake = Snake::with_body(grid(), [IVec2::new(620, 240)], Direction::Right);
        snake.move_forward();
        assert_eq!(snake.head(), IVec2::new(0, 240));
    }

    #[test]
    fn test_move_wraps_top_edge() {
        let mut snake = Snake::with_body(grid(), [IVec2::new(100, 0)], Direction::Up);
        snake.move_forward();
        assert_eq!(snake.head(), IVec2::new(100, 460));
    }

    #[test]
    fn test_grow_skips_tail_pop_once() {
        let mut snake = Snake::new(grid());
        snake.grow();
        snake.move_forward();
        assert_eq!(snake.positions().len(), 2);
        assert_eq!(snake.last_removed(), None);

        snake.move_forward();
        assert_eq!(snake.positions().len(), 2);
        assert_eq!(snake.last_removed(), Some(IVec2::new(340, 240)));
    }

    #[test]
    fn test_reversal_is_dropped() {
        let mut snake = Snake::new(grid());
        snake.set_pending_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), None);
        snake.apply_pending_direction();
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_pending_applies_once() {
        let mut snake = Snake::new(grid());
        snake.set_pending_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Right);
        snake.apply_pending_direction();
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.pending_direction(), None);

        // No pending: nothing changes
        snake.apply_pending_direction();
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_last_accepted_turn_wins() {
        let mut snake = Snake::new(grid());
        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Down);
        snake.apply_pending_direction();
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn test_self_collision_then_reset() {
        let body = [IVec2::new(100, 100), IVec2::new(120, 100), IVec2::new(100, 100)];
        let mut snake = Snake::with_body(grid(), body, Direction::Left);
        assert!(snake.self_collides());

        snake.reset();
        assert!(!snake.self_collides());
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.positions().len(), 1);
        assert_eq!(snake.head(), IVec2::new(320, 240));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_reset_clears_buffers() {
        let mut snake = Snake::new(grid());
        snake.move_forward();
        snake.set_pending_direction(Direction::Down);
        snake.reset();
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.last_removed(), None);
    }

    #[test]
    fn test_single_segment_never_collides() {
        let mut snake = Snake::new(grid());
        for _ in 0..100 {
            snake.move_forward();
            assert!(!snake.self_collides());
        }
    }
}
