use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size board of [`Cell`]s indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Creates a grid without mines. Dimensions are expected to be non-zero.
    pub fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    /// Builds a grid from a mine mask of shape `(cols, rows)` and computes adjacency.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let mut grid = Self {
            cells: mine_mask.map(|&is_mine| Cell::new(is_mine)),
        };
        grid.recompute_adjacency();
        grid
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(&mine_mask))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    /// `(cols, rows)`.
    pub fn size(&self) -> Coord2 {
        let (dim_x, dim_y) = self.cells.dim();
        (
            Coord::try_from(dim_x).unwrap_or(Coord::MAX),
            Coord::try_from(dim_y).unwrap_or(Coord::MAX),
        )
    }

    pub fn cols(&self) -> Coord {
        self.size().0
    }

    pub fn rows(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (cols, rows) = self.size();
        mult(cols, rows)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_mine)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(|cell| cell.revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(|cell| cell.flagged)
    }

    /// Every non-mine cell is revealed. Flags are irrelevant.
    pub fn all_safe_revealed(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_mine || cell.revealed)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Iterates every position together with its cell, column-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells.indexed_iter().map(|((x, y), cell)| {
            // in bounds by construction, so the narrowing never truncates
            ((x as Coord, y as Coord), cell)
        })
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        let count = self.iter_neighbors(coords).filter(|&pos| self[pos].is_mine).count();
        // at most 8 neighbours
        count as u8
    }

    /// Recomputes `adjacent_mines` for every non-mine cell.
    pub fn recompute_adjacency(&mut self) {
        let (x_end, y_end) = self.size();
        for x in 0..x_end {
            for y in 0..y_end {
                let coords = (x, y);
                if !self[coords].is_mine {
                    let count = self.count_adjacent_mines(coords);
                    self[coords].adjacent_mines = count;
                }
            }
        }
    }

    /// Turns a mine into a safe cell and recomputes adjacency for the whole grid.
    ///
    /// Returns whether a mine was actually cleared.
    pub(crate) fn clear_mine(&mut self, coords: Coord2) -> bool {
        if !self[coords].is_mine {
            return false;
        }
        self[coords].is_mine = false;
        self.recompute_adjacency();
        true
    }

    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        let cell = &mut self[coords];
        if cell.revealed {
            return MarkOutcome::NoChange;
        }
        cell.flagged = !cell.flagged;
        MarkOutcome::Changed
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        let count = self.cells.iter().filter(|cell| predicate(cell)).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cells[(x as usize, y as usize)]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, (x, y): Coord2) -> &mut Self::Output {
        &mut self.cells[(x as usize, y as usize)]
    }
}
