//! Board geometry
//!
//! Positions are pixel coordinates that always sit on a cell corner:
//! - x in [0, cols * cell_size), y in [0, rows * cell_size)
//! - both components are multiples of cell_size
//!
//! Any remainder of the board that doesn't fit a whole cell is unused margin.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Fixed board dimensions, in pixels, plus the cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Number of whole cells along x
    #[inline]
    pub fn cols(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of whole cells along y
    #[inline]
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.cols().max(0) as usize) * (self.rows().max(0) as usize)
    }

    /// Playable extent in pixels (margin excluded)
    #[inline]
    pub fn extent(&self) -> IVec2 {
        IVec2::new(self.cols() * self.cell_size, self.rows() * self.cell_size)
    }

    /// Pixel position of the cell at (col, row)
    #[inline]
    pub fn cell_at(&self, col: i32, row: i32) -> IVec2 {
        IVec2::new(col * self.cell_size, row * self.cell_size)
    }

    /// Spawn cell: the cell in the middle of the board
    pub fn center(&self) -> IVec2 {
        self.cell_at(self.cols() / 2, self.rows() / 2)
    }

    /// Wrap an arbitrary position back onto the board (toroidal)
    #[inline]
    pub fn wrap(&self, pos: IVec2) -> IVec2 {
        let extent = self.extent();
        IVec2::new(wrap(pos.x, extent.x), wrap(pos.y, extent.y))
    }

    /// True if `pos` is a cell-aligned position inside the playable extent
    pub fn contains(&self, pos: IVec2) -> bool {
        let extent = self.extent();
        pos.x >= 0
            && pos.y >= 0
            && pos.x < extent.x
            && pos.y < extent.y
            && pos.x % self.cell_size == 0
            && pos.y % self.cell_size == 0
    }
}

/// Map a signed coordinate into [0, extent)
#[inline]
pub fn wrap(value: i32, extent: i32) -> i32 {
    value.rem_euclid(extent)
}
