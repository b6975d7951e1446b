//! # Quintwords
//!
//! Finds every set of five five-letter words that together use 25 distinct
//! letters, out of a dictionary of tens of thousands of words.
//!
//! Words become 26-bit letter masks, anagrams collapse to one candidate
//! mask, and a widening search grows one-word partial solutions a word at
//! a time. Ordering the letters by global rarity and forcing each new word
//! to contain a "frontier" letter just rarer than anything already used
//! makes each word set reachable along essentially one path, which is what
//! keeps the search tractable.

pub mod corpus;
pub mod mask;
pub mod output;
pub mod ranking;
pub mod search;

pub use corpus::Corpus;
pub use mask::LetterMask;
pub use ranking::RarityRanking;
pub use search::{solve, solve_all, SearchContext, SearchParams, SeedRun, Solution};

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Word length for the classic puzzle.
pub const WORD_LENGTH: usize = 5;

/// Words per solution: as many disjoint words as the alphabet admits.
pub const WORDS_PER_SOLUTION: usize = ALPHABET_SIZE / WORD_LENGTH;
