//! Per-round game state: the validated word list, the generated board, and
//! the record of which words have been found so far.
//!
//! A [`Session`] is an explicit object owned by the caller; starting a new
//! round replaces the board and clears the found set wholesale. Nothing here
//! is global.

use std::collections::HashMap;

use rand::Rng;

use crate::{
    board::{Board, Coordinate, WordListError},
    generate::BoardGenerator,
    select::{cells_between, MatchPolicy},
};

/// Minimum characters per word at the input boundary.
pub const MIN_WORD_CHARS: usize = 2;

/// Maximum characters per word at the input boundary.
pub const MAX_WORD_CHARS: usize = 10;

/// Maximum number of words in a list.
pub const MAX_WORDS: usize = 20;

/// Number of distinct highlight tags cycled through as words are found.
pub const COLOR_COUNT: usize = 5;

/// The word list offered as a shortcut at the input boundary.
pub const SAMPLE_WORDS: &[&str] = &[
    "가정", "가족", "대인관계", "의사소통", "식사계획", "조리", "의복관리", "주거문화", "전환기",
    "진로탐색",
];

/// The word list for the bonus round reachable after a finished puzzle.
pub const BONUS_WORDS: &[&str] = &[
    "연애", "행운", "대박", "힐링", "성적", "인기", "베프", "만점", "두쫀쿠", "절친", "집중력",
];

/// A validated, deduplicated list of target words.
///
/// Every word holds [`MIN_WORD_CHARS`]..=[`MAX_WORD_CHARS`] characters
/// (characters, not bytes), no word repeats, and the list holds between one
/// and [`MAX_WORDS`] entries. Immutable once built.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Validate and build a word list, preserving input order.
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for word in words {
            let word = word.into();
            let len = word.chars().count();
            if len < MIN_WORD_CHARS {
                return Err(WordListError::TooShort {
                    word,
                    len,
                    min: MIN_WORD_CHARS,
                });
            }
            if len > MAX_WORD_CHARS {
                return Err(WordListError::TooLong {
                    word,
                    len,
                    max: MAX_WORD_CHARS,
                });
            }
            if list.contains(&word) {
                return Err(WordListError::Duplicate { word });
            }
            list.push(word);
        }
        if list.is_empty() {
            return Err(WordListError::Empty);
        }
        if list.len() > MAX_WORDS {
            return Err(WordListError::TooMany {
                count: list.len(),
                max: MAX_WORDS,
            });
        }
        Ok(Self { words: list })
    }

    /// The built-in sample list.
    pub fn sample() -> Self {
        // The built-in lists satisfy the boundary rules.
        Self::new(SAMPLE_WORDS.iter().copied()).unwrap()
    }

    /// The built-in bonus-round list.
    pub fn bonus() -> Self {
        // The built-in lists satisfy the boundary rules.
        Self::new(BONUS_WORDS.iter().copied()).unwrap()
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty. Validation never produces an empty list,
    /// so this exists only to pair with [`len`][Self::len].
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the words in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }

    /// Whether the list contains the given word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Outcome of resolving a completed selection against the target words.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SelectOutcome {
    /// The selection spelled a target word that had not been found before.
    Found {
        /// The matched word.
        word: String,
        /// The highlight tag assigned to it, in `0..COLOR_COUNT`.
        color: usize,
    },
    /// The selection spelled a word that was already found; nothing changed.
    AlreadyFound(String),
    /// A well-formed selection that spells no remaining target word.
    NoMatch,
    /// The endpoints are not colinear along a supported direction.
    NotALine,
    /// The selection covers a single cell; a match needs at least two.
    TooShort,
}

/// One round of a word-search game: a board, its target words, and the
/// found-so-far record.
#[derive(Debug)]
pub struct Session {
    board: Board,
    words: WordList,
    policy: MatchPolicy,
    generator: BoardGenerator,
    found: HashMap<String, usize>,
    next_color: usize,
}

impl Session {
    /// Generate a board for the given words and start a round with the
    /// default generator configuration.
    pub fn start<R: Rng>(words: WordList, policy: MatchPolicy, rng: &mut R) -> Self {
        Self::with_generator(BoardGenerator::new(), words, policy, rng)
    }

    /// Start a round using a specific generator configuration.
    pub fn with_generator<R: Rng>(
        generator: BoardGenerator,
        words: WordList,
        policy: MatchPolicy,
        rng: &mut R,
    ) -> Self {
        let board = generator.generate(&words, rng);
        Self {
            board,
            words,
            policy,
            generator,
            found: HashMap::new(),
            next_color: 0,
        }
    }

    /// The board for the current round.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The target words for the current round.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// The match policy this session was started with.
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Resolve a completed drag from `start` to `end`.
    ///
    /// A newly matched word is recorded and assigned the next highlight tag;
    /// re-selecting an already-found word changes nothing. Non-colinear or
    /// single-cell selections are reported as such rather than treated as
    /// errors.
    pub fn select(&mut self, start: Coordinate, end: Coordinate) -> SelectOutcome {
        let cells = match cells_between(start, end) {
            Some(cells) => cells,
            None => return SelectOutcome::NotALine,
        };
        if cells.len() < 2 {
            return SelectOutcome::TooShort;
        }

        let forward = self.board.read(&cells);
        let backward: Option<String> = match self.policy {
            MatchPolicy::EitherDirection => Some(forward.chars().rev().collect()),
            MatchPolicy::ForwardOnly => None,
        };

        let matched = self
            .words
            .iter()
            .find(|&w| w == forward || backward.as_deref() == Some(w));

        match matched {
            None => SelectOutcome::NoMatch,
            Some(word) if self.found.contains_key(word) => {
                SelectOutcome::AlreadyFound(word.to_string())
            }
            Some(word) => {
                let color = self.next_color % COLOR_COUNT;
                self.next_color += 1;
                self.found.insert(word.to_string(), color);
                SelectOutcome::Found {
                    word: word.to_string(),
                    color,
                }
            }
        }
    }

    /// Number of target words found so far this round.
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Total number of target words.
    pub fn total(&self) -> usize {
        self.words.len()
    }

    /// Whether every target word has been found.
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.words.len()
    }

    /// Whether the given word has been found this round.
    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains_key(word)
    }

    /// The highlight tag assigned to a found word, if it has been found.
    pub fn found_color(&self, word: &str) -> Option<usize> {
        self.found.get(word).copied()
    }

    /// Iterate the target words not yet found, in input order.
    pub fn remaining_words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().filter(move |w| !self.found.contains_key(*w))
    }

    /// Replace the board and clear all found state, keeping the word list.
    pub fn new_round<R: Rng>(&mut self, rng: &mut R) {
        self.board = self.generator.generate(&self.words, rng);
        self.found.clear();
        self.next_color = 0;
    }

    /// Swap in a different word list and start over.
    pub fn new_round_with_words<R: Rng>(&mut self, words: WordList, rng: &mut R) {
        self.words = words;
        self.new_round(rng);
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::board::Direction;

    fn rightward_session(words: Vec<&str>, policy: MatchPolicy, seed: u64) -> Session {
        let mut rng = StdRng::seed_from_u64(seed);
        Session::with_generator(
            BoardGenerator::new().directions(Direction::Right),
            WordList::new(words).unwrap(),
            policy,
            &mut rng,
        )
    }

    #[test]
    fn word_list_rejects_out_of_bounds_words() {
        assert_eq!(
            WordList::new(vec!["a"]).unwrap_err(),
            WordListError::TooShort {
                word: "a".to_string(),
                len: 1,
                min: MIN_WORD_CHARS,
            }
        );
        assert_eq!(
            WordList::new(vec!["abcdefghijk"]).unwrap_err(),
            WordListError::TooLong {
                word: "abcdefghijk".to_string(),
                len: 11,
                max: MAX_WORD_CHARS,
            }
        );
        assert_eq!(
            WordList::new(vec!["가족", "가족"]).unwrap_err(),
            WordListError::Duplicate {
                word: "가족".to_string(),
            }
        );
        assert_eq!(
            WordList::new(Vec::<String>::new()).unwrap_err(),
            WordListError::Empty
        );

        let too_many: Vec<String> = (0..21).map(|i| format!("word{}", i)).collect();
        assert_eq!(
            WordList::new(too_many).unwrap_err(),
            WordListError::TooMany {
                count: 21,
                max: MAX_WORDS,
            }
        );
    }

    #[test]
    fn word_list_counts_characters_not_bytes() {
        // Ten Hangul characters is thirty bytes but still a valid word.
        assert!(WordList::new(vec!["가나다라마바사아자차"]).is_ok());
    }

    #[test]
    fn built_in_lists_are_valid() {
        assert_eq!(WordList::sample().len(), SAMPLE_WORDS.len());
        assert_eq!(WordList::bonus().len(), BONUS_WORDS.len());
    }

    #[test]
    fn selecting_a_placed_word_finds_it() {
        let mut session = rightward_session(
            vec!["가족", "가정", "소통"],
            MatchPolicy::EitherDirection,
            1,
        );
        assert!(session.board().is_complete_layout());

        let (start, end, word) = {
            let placement = &session.board().placed_words()[0];
            let cells = placement.cells();
            (cells[0], cells[cells.len() - 1], placement.word().to_string())
        };

        assert_eq!(
            session.select(start, end),
            SelectOutcome::Found {
                word: word.clone(),
                color: 0,
            }
        );
        assert_eq!(session.found_count(), 1);
        assert!(session.is_found(&word));
        assert!(!session.remaining_words().any(|w| w == word));
    }

    #[test]
    fn refinding_a_word_changes_nothing() {
        let mut session = rightward_session(
            vec!["가족", "가정", "소통"],
            MatchPolicy::EitherDirection,
            2,
        );
        let (start, end, word) = {
            let placement = &session.board().placed_words()[0];
            let cells = placement.cells();
            (cells[0], cells[cells.len() - 1], placement.word().to_string())
        };

        assert!(matches!(session.select(start, end), SelectOutcome::Found { .. }));
        assert_eq!(session.select(start, end), SelectOutcome::AlreadyFound(word.clone()));
        assert_eq!(session.found_count(), 1);
        assert_eq!(session.found_color(&word), Some(0));
    }

    #[test]
    fn reverse_selection_follows_the_policy() {
        // Either-direction: swiping backward over a placed word matches.
        let mut either = rightward_session(
            vec!["가족", "나무", "소통"],
            MatchPolicy::EitherDirection,
            3,
        );
        let (start, end) = {
            let cells = either.board().placed_words()[0].cells();
            (cells[cells.len() - 1], cells[0])
        };
        assert!(matches!(either.select(start, end), SelectOutcome::Found { .. }));

        // Forward-only: the same backward swipe spells a reversed word that
        // is not a target.
        let mut forward = rightward_session(
            vec!["가족", "나무", "소통"],
            MatchPolicy::ForwardOnly,
            3,
        );
        let (start, end) = {
            let cells = forward.board().placed_words()[0].cells();
            (cells[cells.len() - 1], cells[0])
        };
        assert_eq!(forward.select(start, end), SelectOutcome::NoMatch);
    }

    #[test]
    fn malformed_selections_are_reported_not_matched() {
        let mut session = rightward_session(
            vec!["가족", "가정", "소통"],
            MatchPolicy::EitherDirection,
            4,
        );
        assert_eq!(
            session.select((0, 0).into(), (2, 3).into()),
            SelectOutcome::NotALine
        );
        assert_eq!(
            session.select((1, 1).into(), (1, 1).into()),
            SelectOutcome::TooShort
        );
        assert_eq!(session.found_count(), 0);
    }

    #[test]
    fn colors_cycle_through_the_palette() {
        let words = vec!["ab", "cd", "ef", "gh", "ij", "kl"];
        let mut session = rightward_session(words, MatchPolicy::ForwardOnly, 6);
        assert!(session.board().is_complete_layout());

        let placements: Vec<_> = session
            .board()
            .placed_words()
            .iter()
            .map(|p| (p.cells()[0], p.cells()[p.cells().len() - 1]))
            .collect();
        for (i, (start, end)) in placements.into_iter().enumerate() {
            match session.select(start, end) {
                SelectOutcome::Found { color, .. } => assert_eq!(color, i % COLOR_COUNT),
                other => panic!("expected a fresh find, got {:?}", other),
            }
        }
        assert!(session.is_complete());
        assert_eq!(session.found_count(), 6);
    }

    #[test]
    fn new_round_resets_found_state() {
        let mut session = rightward_session(
            vec!["가족", "가정", "소통"],
            MatchPolicy::EitherDirection,
            8,
        );
        let (start, end) = {
            let cells = session.board().placed_words()[0].cells();
            (cells[0], cells[cells.len() - 1])
        };
        assert!(matches!(session.select(start, end), SelectOutcome::Found { .. }));

        let mut rng = StdRng::seed_from_u64(9);
        session.new_round(&mut rng);
        assert_eq!(session.found_count(), 0);
        assert_eq!(session.total(), 3);
        assert!(session.board().is_complete_layout());
    }

    #[test]
    fn new_round_with_words_swaps_the_list() {
        let mut session = rightward_session(
            vec!["가족", "가정", "소통"],
            MatchPolicy::EitherDirection,
            10,
        );
        let mut rng = StdRng::seed_from_u64(11);
        session.new_round_with_words(WordList::bonus(), &mut rng);
        assert_eq!(session.total(), BONUS_WORDS.len());
        assert_eq!(session.found_count(), 0);
        assert!(session.words().contains("행운"));
    }
}
