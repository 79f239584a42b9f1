//! Desk grid and occupancy
//!
//! Every character that sits at a desk (player and NPCs) marks its cell as
//! occupied. The lecturer walks between desks and never occupies one.

use glam::IVec2;
use rand::Rng;

use crate::consts::{GRID_HEIGHT, GRID_WIDTH};

/// One desk cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Desk {
    /// Someone is sitting here
    pub occupied: bool,
}

/// Row-major grid of desks
#[derive(Debug, Clone)]
pub struct DeskGrid {
    width: i32,
    height: i32,
    desks: Vec<Desk>,
}

impl Default for DeskGrid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl DeskGrid {
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            desks: vec![Desk::default(); len],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| (cell.y * self.width + cell.x) as usize)
    }

    pub fn desk(&self, cell: IVec2) -> Option<&Desk> {
        self.index(cell).map(|i| &self.desks[i])
    }

    /// Out-of-bounds cells report as occupied so nothing can move there
    pub fn is_occupied(&self, cell: IVec2) -> bool {
        self.desk(cell).is_none_or(|d| d.occupied)
    }

    /// Seat someone at `cell`
    pub fn occupy(&mut self, cell: IVec2) {
        if let Some(i) = self.index(cell) {
            self.desks[i].occupied = true;
        }
    }

    /// Move a seated character from `from` to `to` in one step.
    ///
    /// Returns false (and changes nothing) if `to` is out of bounds or taken.
    pub fn relocate(&mut self, from: IVec2, to: IVec2) -> bool {
        let (Some(src), Some(dst)) = (self.index(from), self.index(to)) else {
            return false;
        };
        if self.desks[dst].occupied {
            return false;
        }
        self.desks[src].occupied = false;
        self.desks[dst].occupied = true;
        true
    }

    /// All unoccupied cells in row-major order
    pub fn empty_cells(&self) -> Vec<IVec2> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| IVec2::new(x, y)))
            .filter(|&c| !self.is_occupied(c))
            .collect()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.desks.iter().filter(|d| d.occupied).count()
    }

    /// Uniformly random unoccupied cell, or the grid origin when the room is full
    pub fn random_empty_cell<R: Rng>(&self, rng: &mut R) -> IVec2 {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return IVec2::ZERO;
        }
        empty[rng.random_range(0..empty.len())]
    }
}
