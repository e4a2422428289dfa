//! Board generation: randomized placement of the target words into a fresh
//! grid, with filler characters over whatever is left.

use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use rand::{seq::SliceRandom, Rng};

use crate::{
    board::{Board, Coordinate, Direction, Grid, PlacedWord},
    session::WordList,
};

/// Characters used to fill cells no word covers. The default set is the
/// common Hangul ka/na/da syllable table, so filler blends in with Korean
/// word lists.
pub static DEFAULT_FILLER: Lazy<Vec<char>> = Lazy::new(|| {
    "가나다라마바사아자차카타파하거너더러머버서어저처커터퍼허\
     고노도로모보소오조초코토포호구누두루무부수우주추쿠투푸후"
        .chars()
        .collect()
});

/// Smallest side length a generated grid may have.
pub const MIN_SIZE: usize = 5;

/// Largest side length a generated grid may have.
pub const MAX_SIZE: usize = 10;

/// Number of times the generator restarts placement from a fresh grid before
/// settling for a partial layout.
pub const MAX_ATTEMPTS: usize = 50;

/// Configures and runs board generation.
///
/// The defaults match a standard puzzle: all eight directions, the Hangul
/// filler alphabet, and a budget of [`MAX_ATTEMPTS`] placement attempts. All
/// randomness comes from the [`Rng`] handed to [`generate`][Self::generate],
/// so a seeded generator reproduces the same board and `thread_rng` gives a
/// fresh one per round.
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    directions: BitFlags<Direction>,
    filler: Vec<char>,
    attempts: usize,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGenerator {
    /// Construct a generator with the default configuration.
    pub fn new() -> Self {
        Self {
            directions: BitFlags::all(),
            filler: DEFAULT_FILLER.clone(),
            attempts: MAX_ATTEMPTS,
        }
    }

    /// Restrict the directions words may read along. Accepts a single
    /// [`Direction`] or any combination, e.g. [`Direction::forward`] for
    /// puzzles without backward-reading words.
    /// Panics if the set is empty.
    pub fn directions<B: Into<BitFlags<Direction>>>(mut self, directions: B) -> Self {
        let directions = directions.into();
        assert!(!directions.is_empty(), "direction set must not be empty");
        self.directions = directions;
        self
    }

    /// Replace the filler alphabet. Panics if the alphabet is empty.
    pub fn filler<I: IntoIterator<Item = char>>(mut self, filler: I) -> Self {
        let filler: Vec<char> = filler.into_iter().collect();
        assert!(!filler.is_empty(), "filler alphabet must not be empty");
        self.filler = filler;
        self
    }

    /// Override the placement retry budget. Panics if `attempts` is 0.
    pub fn attempts(mut self, attempts: usize) -> Self {
        assert!(attempts > 0, "at least one placement attempt is required");
        self.attempts = attempts;
        self
    }

    /// Generate a board for the given word list.
    ///
    /// Placement is retried from a fresh grid until every word fits or the
    /// attempt budget runs out. Generation never fails: if the budget is
    /// exhausted, the final attempt's partial layout is returned and the
    /// words that did not fit are reported through
    /// [`Board::unplaced_words`]. Either way, every leftover cell is filled
    /// from the filler alphabet, so a finished board has no unset cells.
    pub fn generate<R: Rng>(&self, words: &WordList, rng: &mut R) -> Board {
        let size = grid_size(words);

        let mut layout = self.attempt(words, size, rng);
        for _ in 1..self.attempts {
            if layout.unplaced.is_empty() {
                break;
            }
            layout = self.attempt(words, size, rng);
        }

        let Layout {
            mut grid,
            placed,
            unplaced,
        } = layout;
        self.fill(&mut grid, rng);
        Board {
            grid,
            placed,
            unplaced,
        }
    }

    /// Run one placement attempt on a fresh grid.
    fn attempt<R: Rng>(&self, words: &WordList, size: usize, rng: &mut R) -> Layout {
        let mut order: Vec<&str> = words.iter().collect();
        // Shuffle before the stable sort so equal-length words end up in
        // random relative order. Longest words go first; they are the
        // hardest to fit.
        order.shuffle(rng);
        order.sort_by(|a, b| char_len(b).cmp(&char_len(a)));

        let mut grid = Grid::new(size);
        let mut placed = Vec::with_capacity(order.len());
        let mut unplaced = Vec::new();

        for (i, &word) in order.iter().enumerate() {
            match self.place_word(&mut grid, word, rng) {
                Some(placement) => placed.push(placement),
                None => {
                    // One unplaceable word abandons the whole attempt; the
                    // words never tried count as unplaced too.
                    unplaced.extend(order[i..].iter().map(|w| w.to_string()));
                    break;
                }
            }
        }

        Layout {
            grid,
            placed,
            unplaced,
        }
    }

    /// Try to place a single word somewhere on the grid, scanning directions
    /// and start cells in random order and taking the first feasible slot.
    fn place_word<R: Rng>(&self, grid: &mut Grid, word: &str, rng: &mut R) -> Option<PlacedWord> {
        let chars: Vec<char> = word.chars().collect();

        let mut dirs: Vec<Direction> = Direction::ALL
            .iter()
            .copied()
            .filter(|&dir| self.directions.contains(dir))
            .collect();
        dirs.shuffle(rng);

        let mut starts: Vec<Coordinate> = grid.coordinates().collect();
        for dir in dirs {
            starts.shuffle(rng);
            for &start in &starts {
                if let Some(cells) = span_cells(grid, &chars, start, dir) {
                    for (&ch, &cell) in chars.iter().zip(&cells) {
                        grid[cell] = Some(ch);
                    }
                    return Some(PlacedWord {
                        word: word.to_string(),
                        start,
                        direction: dir,
                        cells,
                    });
                }
            }
        }
        None
    }

    /// Fill every still-unset cell with a uniformly random filler character.
    fn fill<R: Rng>(&self, grid: &mut Grid, rng: &mut R) {
        for cell in grid.cells.iter_mut() {
            if cell.is_none() {
                *cell = Some(self.filler[rng.gen_range(0, self.filler.len())]);
            }
        }
    }
}

/// The grid and placement record produced by a single attempt.
struct Layout {
    grid: Grid,
    placed: Vec<PlacedWord>,
    unplaced: Vec<String>,
}

/// The cells `chars` would occupy from `start` along `dir`, or `None` if the
/// span leaves the grid or crosses a cell holding a different character.
/// Cells that already hold the required character are fine; that is how
/// words come to share letters.
fn span_cells(grid: &Grid, chars: &[char], start: Coordinate, dir: Direction) -> Option<Vec<Coordinate>> {
    let mut cells = Vec::with_capacity(chars.len());
    for (i, &ch) in chars.iter().enumerate() {
        let cell = start.offset(dir, i)?;
        match grid.get(cell)? {
            Some(existing) if *existing != ch => return None,
            _ => cells.push(cell),
        }
    }
    Some(cells)
}

/// Pick the grid side length for a word list: room for the longest word plus
/// margin, grown by word count so placement rarely needs its retry budget,
/// clamped to `[MIN_SIZE, MAX_SIZE]`.
pub(crate) fn grid_size(words: &WordList) -> usize {
    let max_len = words.iter().map(char_len).max().unwrap_or(0);
    let by_area = ((words.len() * max_len * 2) as f64).sqrt().ceil() as usize;
    (max_len + 2).max(by_area).max(MIN_SIZE).min(MAX_SIZE)
}

/// Length of a word in characters, not bytes. Multi-byte scripts would
/// otherwise demand absurdly large grids.
fn char_len(word: &str) -> usize {
    word.chars().count()
}
