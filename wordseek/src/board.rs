//! Types that make up the puzzle board.

use std::fmt;

pub(crate) use self::grid::Grid;
pub use self::{coord::Coordinate, direction::Direction, errors::WordListError};

mod coord;
mod direction;
mod errors;
mod grid;

/// A word that was laid into the grid: the word itself, where it starts,
/// which way it reads, and the ordered cells it occupies.
///
/// Placed words may share cells where their characters agree; that overlap is
/// intentional.
#[derive(Debug, Clone)]
pub struct PlacedWord {
    pub(crate) word: String,
    pub(crate) start: Coordinate,
    pub(crate) direction: Direction,
    pub(crate) cells: Vec<Coordinate>,
}

impl PlacedWord {
    /// The word that was placed.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The cell holding the word's first character.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The direction the word reads along.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The cells the word occupies, in reading order.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }
}

/// A completed word-search board: the filled letter grid plus the record of
/// where each word ended up.
///
/// Boards are built by a [`BoardGenerator`][crate::generate::BoardGenerator]
/// and never change afterward; a new round gets a new board. Every cell of a
/// finished board holds a character.
#[derive(Debug)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) placed: Vec<PlacedWord>,
    pub(crate) unplaced: Vec<String>,
}

impl Board {
    /// Side length of the square grid.
    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// The character at the given coordinate, or `None` if it is out of
    /// bounds.
    pub fn get(&self, coord: Coordinate) -> Option<char> {
        self.grid.get(coord).copied().and_then(|cell| cell)
    }

    /// Concatenate the characters at the given cells, in order.
    ///
    /// This is a pure lookup: coordinates outside the grid contribute
    /// nothing. Sequences produced by
    /// [`cells_between`][crate::select::cells_between] from in-bounds
    /// endpoints are always fully in bounds.
    pub fn read(&self, cells: &[Coordinate]) -> String {
        cells.iter().filter_map(|&cell| self.get(cell)).collect()
    }

    /// Iterate over the rows of the board. Each row is an iterator over the
    /// characters of that row, for rendering.
    pub fn rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = char>> {
        let size = self.grid.size;
        (0..size).map(move |row| {
            // Generation fills every cell, so an unset cell can never be
            // observed through a finished board.
            (0..size).map(move |col| self.get(Coordinate::new(row, col)).unwrap_or(' '))
        })
    }

    /// Every word that was successfully laid into the grid.
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Words from the input list the generator gave up on after exhausting
    /// its retry budget. Usually empty; a caller that finds entries here may
    /// want to regenerate with a different word set rather than present an
    /// unsolvable puzzle.
    pub fn unplaced_words(&self) -> &[String] {
        &self.unplaced
    }

    /// Whether every input word made it onto the board.
    pub fn is_complete_layout(&self) -> bool {
        self.unplaced.is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for ch in row {
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
