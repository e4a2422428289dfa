//! Errors raised at the word-list input boundary.

use thiserror::Error;

/// Reason a list of words was rejected when building a
/// [`WordList`][crate::session::WordList].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum WordListError {
    /// No words were provided at all.
    #[error("a word list needs at least one word")]
    Empty,

    /// A word fell below the minimum character count.
    #[error("word {word:?} is too short: {len} of at least {min} characters")]
    TooShort {
        /// The rejected word.
        word: String,
        /// Its character count.
        len: usize,
        /// The minimum character count.
        min: usize,
    },

    /// A word exceeded the maximum character count.
    #[error("word {word:?} is too long: {len} of at most {max} characters")]
    TooLong {
        /// The rejected word.
        word: String,
        /// Its character count.
        len: usize,
        /// The maximum character count.
        max: usize,
    },

    /// The same word appeared more than once.
    #[error("word {word:?} appears more than once")]
    Duplicate {
        /// The duplicated word.
        word: String,
    },

    /// The list exceeded the word-count cap.
    #[error("too many words: {count} of at most {max}")]
    TooMany {
        /// Number of words provided.
        count: usize,
        /// The word-count cap.
        max: usize,
    },
}
