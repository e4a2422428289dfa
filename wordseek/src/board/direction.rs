use enumflags2::BitFlags;

/// One of the eight straight-line directions a word can read along,
/// as a unit step in `(row, col)`.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Direction {
    /// Step `(0, 1)`: left to right within a row.
    Right = 0b0000_0001,
    /// Step `(1, 0)`: top to bottom within a column.
    Down = 0b0000_0010,
    /// Step `(1, 1)`: diagonal toward the bottom-right.
    DownRight = 0b0000_0100,
    /// Step `(-1, 1)`: diagonal toward the top-right.
    UpRight = 0b0000_1000,
    /// Step `(0, -1)`: right to left within a row.
    Left = 0b0001_0000,
    /// Step `(-1, 0)`: bottom to top within a column.
    Up = 0b0010_0000,
    /// Step `(-1, -1)`: diagonal toward the top-left.
    UpLeft = 0b0100_0000,
    /// Step `(1, -1)`: diagonal toward the bottom-left.
    DownLeft = 0b1000_0000,
}

impl Direction {
    /// All eight directions, in the order the generator considers them
    /// before shuffling.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::UpRight,
        Direction::Left,
        Direction::Up,
        Direction::UpLeft,
        Direction::DownLeft,
    ];

    /// The `(row, col)` unit step for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
        }
    }

    /// The direction pointing the opposite way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::DownRight => Direction::UpLeft,
            Direction::UpRight => Direction::DownLeft,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::UpLeft => Direction::DownRight,
            Direction::DownLeft => Direction::UpRight,
        }
    }

    /// The direction matching the given unit step, or `None` if the step is
    /// not one of the eight supported unit vectors.
    pub fn from_delta(dr: isize, dc: isize) -> Option<Self> {
        match (dr, dc) {
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Down),
            (1, 1) => Some(Direction::DownRight),
            (-1, 1) => Some(Direction::UpRight),
            (0, -1) => Some(Direction::Left),
            (-1, 0) => Some(Direction::Up),
            (-1, -1) => Some(Direction::UpLeft),
            (1, -1) => Some(Direction::DownLeft),
            _ => None,
        }
    }

    /// The four directions that read the way text does, left-to-right or
    /// top-to-bottom. Restricting a generator to these makes easier puzzles.
    pub fn forward() -> BitFlags<Direction> {
        Direction::Right | Direction::Down | Direction::DownRight | Direction::UpRight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_round_trips_through_from_delta() {
        for &dir in Direction::ALL.iter() {
            let (dr, dc) = dir.delta();
            assert_eq!(Direction::from_delta(dr, dc), Some(dir));
        }
    }

    #[test]
    fn from_delta_rejects_non_unit_steps() {
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 1), None);
        assert_eq!(Direction::from_delta(-1, 2), None);
    }

    #[test]
    fn opposite_negates_delta() {
        for &dir in Direction::ALL.iter() {
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr, dc), (-or, -oc));
        }
    }

    #[test]
    fn forward_directions_never_read_leftward_or_upward_rows() {
        for dir in Direction::ALL.iter().filter(|d| Direction::forward().contains(**d)) {
            let (_, dc) = dir.delta();
            assert!(dc >= 0);
        }
    }
}
