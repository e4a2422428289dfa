//! Defines the letter grid storage. The same structure backs generation,
//! where cells start unset, and the finished board, where every cell holds a
//! character.

use std::ops::{Index, IndexMut};

use crate::board::Coordinate;

/// Square grid of optionally-set characters, stored row-major.
#[derive(Debug, Clone)]
pub(crate) struct Grid {
    /// Side length of the grid.
    pub(crate) size: usize,
    /// Cells in row-major order. `None` means the cell has not been set yet.
    pub(crate) cells: Box<[Option<char>]>,
}

impl Grid {
    /// Allocate a fresh grid with every cell unset.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size].into_boxed_slice(),
        }
    }

    /// Convert a coordinate to a linear index within this grid.
    /// Returns `None` if the coordinate is out of bounds.
    fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if coord.row < self.size && coord.col < self.size {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(crate) fn get(&self, coord: Coordinate) -> Option<&Option<char>> {
        self.try_linearize(coord).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(crate) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Option<char>> {
        self.try_linearize(coord).map(move |i| &mut self.cells[i])
    }

    /// Iterate the coordinates of the grid in row-major order.
    pub(crate) fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
    }
}

impl Index<Coordinate> for Grid {
    type Output = Option<char>;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_grid_is_unset() {
        let grid = Grid::new(5);
        assert_eq!(grid.coordinates().count(), 25);
        assert!(grid.coordinates().all(|c| grid[c].is_none()));
    }

    #[test]
    fn get_rejects_out_of_bounds() {
        let grid = Grid::new(5);
        assert!(grid.get(Coordinate::new(5, 0)).is_none());
        assert!(grid.get(Coordinate::new(0, 5)).is_none());
        assert!(grid.get(Coordinate::new(4, 4)).is_some());
    }
}
