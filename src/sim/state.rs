//! Game state owned by the loop controller

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::Food;
use super::grid::Grid;
use super::snake::Snake;

/// Loop phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Quit requested; no more ticks
    Terminated,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Snake cells, head first
    pub snake: &'a VecDeque<IVec2>,
    /// Cell vacated by the tail this tick
    pub erase: Option<IVec2>,
    pub food: IVec2,
}

/// Complete game state (single owner, single thread)
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub snake: Snake,
    pub food: Food,
    pub phase: GamePhase,
    /// Ticks simulated so far
    pub time_ticks: u64,
    /// Longest body reached this session
    pub best_length: usize,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(grid: Grid, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = Snake::new(grid);
        let food = Food::spawn(&grid, &snake.occupied(), &mut rng);

        Self {
            grid,
            seed,
            rng,
            snake,
            food,
            phase: GamePhase::Running,
            time_ticks: 0,
            best_length: 1,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Re-place the food away from the current body
    pub fn respawn_food(&mut self) {
        let occupied = self.snake.occupied();
        self.food.respawn(&self.grid, &occupied, &mut self.rng);
    }

    /// Re-place the food away from the body and the cell the head moves into next
    pub fn respawn_food_ahead(&mut self) {
        let mut occupied = self.snake.occupied();
        occupied.insert(self.snake.next_head());
        self.food.respawn(&self.grid, &occupied, &mut self.rng);
    }

    /// Render hand-off for the current state
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            snake: self.snake.positions(),
            erase: self.snake.last_removed(),
            food: self.food.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Grid::new(640, 480, 20), 12345);
        assert!(state.is_running());
        assert_eq!(state.snake.head(), IVec2::new(320, 240));
        assert_ne!(state.food.position, state.snake.head());
        assert!(state.grid.contains(state.food.position));
    }

    #[test]
    fn test_same_seed_same_food() {
        let a = GameState::new(Grid::new(640, 480, 20), 42);
        let b = GameState::new(Grid::new(640, 480, 20), 42);
        assert_eq!(a.food, b.food);
    }

    #[test]
    fn test_frame_mirrors_state() {
        let mut state = GameState::new(Grid::new(640, 480, 20), 1);
        state.snake.move_forward();
        let frame = state.frame();
        assert_eq!(frame.snake.len(), 1);
        assert_eq!(frame.erase, Some(IVec2::new(320, 240)));
        assert_eq!(frame.food, state.food.position);
    }
}
