//! Global letter-rarity ranking over the candidate set.
//!
//! Ordering the search by how rarely each letter appears front-loads the
//! most constraining letters: branches anchored on a rare letter die early,
//! and the frontier rule built on this ranking suppresses permutations of
//! the same word set.

use crate::mask::LetterMask;
use crate::ALPHABET_SIZE;

/// The 26 single-letter masks ordered from rarest to most common across a
/// candidate set, with the inverse lookup from letter to rank position.
/// Computed once per run and immutable afterwards.
#[derive(Debug, Clone)]
pub struct RarityRanking {
    /// `order[rank]` is the single-letter mask holding that rank.
    order: [LetterMask; ALPHABET_SIZE],
    /// `rank_of[letter_index]` is the rank position of that letter.
    rank_of: [usize; ALPHABET_SIZE],
}

impl RarityRanking {
    /// Count how many candidate masks contain each letter, then sort the
    /// letters ascending by count. The sort is stable, so ties keep
    /// letter-index order and the ranking is deterministic for a given
    /// candidate set.
    pub fn from_candidates(candidates: &[LetterMask]) -> Self {
        let mut counts = [0usize; ALPHABET_SIZE];
        for mask in candidates {
            for (index, count) in counts.iter_mut().enumerate() {
                if mask.0 & (1u32 << index) != 0 {
                    *count += 1;
                }
            }
        }

        let mut letters: Vec<usize> = (0..ALPHABET_SIZE).collect();
        letters.sort_by_key(|&index| counts[index]);

        let mut order = [LetterMask::EMPTY; ALPHABET_SIZE];
        let mut rank_of = [0usize; ALPHABET_SIZE];
        for (rank, &index) in letters.iter().enumerate() {
            order[rank] = LetterMask::letter(index);
            rank_of[index] = rank;
        }

        Self { order, rank_of }
    }

    /// The single-letter mask holding rank `rank` (0 = rarest).
    pub fn letter_at(&self, rank: usize) -> LetterMask {
        self.order[rank]
    }

    /// Rank position of the letter at `index` (0 = 'a').
    pub fn rank_of(&self, index: usize) -> usize {
        self.rank_of[index]
    }

    /// Rank position of the rarest letter present in `mask`, or
    /// `ALPHABET_SIZE` when the mask is empty.
    pub fn min_rank(&self, mask: LetterMask) -> usize {
        (0..ALPHABET_SIZE)
            .find(|&rank| mask.intersects(self.order[rank]))
            .unwrap_or(ALPHABET_SIZE)
    }

    /// Single-letter mask of the rarest letter present in `mask`, or
    /// `EMPTY` when the mask is empty.
    pub fn rarest_letter(&self, mask: LetterMask) -> LetterMask {
        let rank = self.min_rank(mask);
        if rank < ALPHABET_SIZE {
            self.order[rank]
        } else {
            LetterMask::EMPTY
        }
    }
}
