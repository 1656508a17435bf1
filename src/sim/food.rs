//! The food item and its random placement

use std::collections::HashSet;

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Pick a uniformly random cell that isn't in `occupied`.
///
/// Rejection sampling; loops forever if every cell is occupied.
pub fn place<R: Rng + ?Sized>(grid: &Grid, occupied: &HashSet<IVec2>, rng: &mut R) -> IVec2 {
    loop {
        let col = rng.random_range(0..grid.cols());
        let row = rng.random_range(0..grid.rows());
        let pos = grid.cell_at(col, row);
        if !occupied.contains(&pos) {
            return pos;
        }
    }
}

/// The single food cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub position: IVec2,
}

impl Food {
    /// Create food at a random free cell
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, occupied: &HashSet<IVec2>, rng: &mut R) -> Self {
        Self {
            position: place(grid, occupied, rng),
        }
    }

    /// Move the food to a new random free cell
    pub fn respawn<R: Rng + ?Sized>(&mut self, grid: &Grid, occupied: &HashSet<IVec2>, rng: &mut R) {
        self.position = place(grid, occupied, rng);
        log::debug!("Food placed at ({}, {})", self.position.x, self.position.y);
    }
}
