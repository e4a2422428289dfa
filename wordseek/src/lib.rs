#![warn(missing_docs)]

//! Generation and play of word-search puzzles.
//!
//! [`generate`] lays a list of target words into a square letter grid along
//! up to eight straight-line directions, retrying on placement conflicts,
//! and fills the leftover cells with filler characters. [`select`] turns a
//! pair of drag endpoints into the run of cells between them. [`session`]
//! ties the two together into a playable round that tracks which words have
//! been found.
//!
//! Randomness is always supplied by the caller as a [`rand::Rng`], so boards
//! are reproducible under a seeded generator and fresh under
//! `rand::thread_rng`.

pub mod board;
pub mod generate;
pub mod select;
pub mod session;
