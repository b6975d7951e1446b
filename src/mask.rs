//! Bitmask encoding of the letters present in a word.
//!
//! A word is represented as a `u32` with bit `i` set when letter `a + i`
//! occurs in it. Anagrams collapse to the same mask, and letter-disjointness
//! between words becomes a single bitwise AND.

use std::fmt;

/// A set of lowercase ASCII letters packed into the low 26 bits of a `u32`.
///
/// A mask built from a valid word has exactly `word_length` bits set; the
/// corpus loader enforces that, so the codec itself never re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LetterMask(pub u32);

impl LetterMask {
    /// The mask with no letters.
    pub const EMPTY: Self = Self(0);

    /// Single-letter mask for the letter at `index` (0 = 'a', 25 = 'z').
    pub fn letter(index: usize) -> Self {
        Self(1 << index)
    }

    /// Encode a word by setting bit `c - 'a'` for each of its letters.
    /// The caller guarantees lowercase ASCII input.
    pub fn encode(word: &str) -> Self {
        let mut mask = 0u32;
        for b in word.bytes() {
            mask |= 1 << (b - b'a');
        }
        Self(mask)
    }

    /// The letters present, ascending by letter index. Produces a real word
    /// only for masks that came from one, which is all the search ever
    /// hands back out.
    pub fn decode(self) -> String {
        (0..26)
            .filter(|i| self.0 & (1u32 << i) != 0)
            .map(|i| (b'a' + i as u8) as char)
            .collect()
    }

    /// Number of letters present.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// True when every letter of `other` is present in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when the two masks share no letters.
    pub fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// True when the two masks share at least one letter.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl std::ops::BitOr for LetterMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for LetterMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.decode())
    }
}
