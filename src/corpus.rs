//! Dictionary loading and candidate-set construction.
//!
//! Filtering happens entirely here: only words of exactly the requested
//! length with no repeated letter reach the search, which therefore never
//! re-validates its input masks.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::mask::LetterMask;

/// The filtered dictionary: every usable raw word paired with its letter
/// mask, plus the anagram-collapsed candidate mask set the search runs on.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct Corpus {
    word_length: usize,
    raw_words: Vec<String>,
    word_masks: Vec<LetterMask>,
    candidates: Vec<LetterMask>,
}

impl Corpus {
    /// Build a corpus from raw word entries, keeping only words of exactly
    /// `word_length` ASCII letters with all letters distinct. Entries are
    /// trimmed and lowercased first.
    pub fn from_words<I, S>(words: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw_words = Vec::new();
        let mut word_masks = Vec::new();

        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.len() != word_length || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                continue;
            }
            let mask = LetterMask::encode(&word);
            if mask.count() as usize != word_length {
                // repeated letter
                continue;
            }
            raw_words.push(word);
            word_masks.push(mask);
        }

        let mut candidates = word_masks.clone();
        candidates.sort_unstable();
        candidates.dedup();

        Self {
            word_length,
            raw_words,
            word_masks,
            candidates,
        }
    }

    /// Load a newline-delimited dictionary file.
    pub fn from_path(path: impl AsRef<Path>, word_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open dictionary {}", path.display()))?;
        Self::from_reader(BufReader::new(file), word_length)
    }

    /// Load a newline-delimited dictionary from any buffered reader.
    pub fn from_reader(reader: impl BufRead, word_length: usize) -> Result<Self> {
        let lines: Vec<String> = reader
            .lines()
            .collect::<std::io::Result<_>>()
            .context("failed to read dictionary")?;
        Ok(Self::from_words(lines, word_length))
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of usable raw words (anagrams counted separately).
    pub fn len(&self) -> usize {
        self.raw_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_words.is_empty()
    }

    /// The deduplicated, sorted candidate masks the search operates on.
    pub fn candidates(&self) -> &[LetterMask] {
        &self.candidates
    }

    /// Every raw word that encodes to `mask` — the anagram group.
    pub fn words_for(&self, mask: LetterMask) -> Vec<&str> {
        self.raw_words
            .iter()
            .zip(&self.word_masks)
            .filter_map(|(word, &m)| (m == mask).then(|| word.as_str()))
            .collect()
    }
}
