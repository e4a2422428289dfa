//! Straight-line selection matching: turning a pair of drag endpoints into
//! the run of cells between them.

use crate::board::{Coordinate, Direction};

/// How a completed selection is compared against the target words.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MatchPolicy {
    /// A selection matches if its letters read out forward *or* backward
    /// equal a target word, so a word may be swiped from either end. This is
    /// the default.
    EitherDirection,

    /// Only the forward reading counts; the selection must run the same way
    /// the word was placed.
    ForwardOnly,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        MatchPolicy::EitherDirection
    }
}

/// The cells on the straight segment from `start` to `end` inclusive,
/// ordered from `start` to `end`.
///
/// Returns `Some` only when the endpoints are colinear along one of the
/// eight supported directions: same row, same column, or a true diagonal
/// where the row and column offsets have equal magnitude. Identical
/// endpoints yield the single-cell sequence. Anything else (for example a
/// knight's-move offset) is `None`; callers treat that as "no selection",
/// not an error.
pub fn cells_between(start: Coordinate, end: Coordinate) -> Option<Vec<Coordinate>> {
    if start == end {
        return Some(vec![start]);
    }

    let dr = end.row as isize - start.row as isize;
    let dc = end.col as isize - start.col as isize;
    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return None;
    }

    // The signum pair is now one of the eight unit vectors; (0, 0) was
    // handled above.
    let dir = Direction::from_delta(dr.signum(), dc.signum())?;
    let steps = dr.abs().max(dc.abs()) as usize;
    (0..=steps).map(|i| start.offset(dir, i)).collect()
}
