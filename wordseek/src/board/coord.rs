use crate::board::Direction;

/// The position of a single cell in the letter grid, counted as `(row, col)`
/// from the top-left corner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Row of the cell, counted from the top.
    pub row: usize,
    /// Column of the cell, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `steps` cells away from this one along `dir`. Returns `None`
    /// if stepping that far crosses the top or left edge of the grid; the
    /// caller is responsible for checking the bottom and right edges against
    /// the grid size.
    pub fn offset(self, dir: Direction, steps: usize) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = add_signed(self.row, dr * steps as isize)?;
        let col = add_signed(self.col, dc * steps as isize)?;
        Some(Self { row, col })
    }
}

fn add_signed(base: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        base.checked_sub((-delta) as usize)
    } else {
        base.checked_add(delta as usize)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_steps_along_direction() {
        let start = Coordinate::new(2, 1);
        assert_eq!(start.offset(Direction::Right, 3), Some(Coordinate::new(2, 4)));
        assert_eq!(start.offset(Direction::UpLeft, 1), Some(Coordinate::new(1, 0)));
        assert_eq!(start.offset(Direction::DownRight, 0), Some(start));
    }

    #[test]
    fn offset_rejects_crossing_origin_edges() {
        let start = Coordinate::new(1, 2);
        assert_eq!(start.offset(Direction::Up, 2), None);
        assert_eq!(start.offset(Direction::Left, 3), None);
    }
}
