//! The widening search: frontier selection, generation expansion, and the
//! driver that grows one-word seeds into full solutions.
//!
//! Each widening step is a pure function from one generation of partial
//! solutions to the next; candidate filtering is partitioned by unique
//! combined mask and runs in parallel, with the results merged without
//! coordination.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use anyhow::{bail, ensure, Result};
use itertools::Itertools;
use rayon::prelude::*;

use crate::corpus::Corpus;
use crate::mask::LetterMask;
use crate::ranking::RarityRanking;
use crate::{ALPHABET_SIZE, WORDS_PER_SOLUTION, WORD_LENGTH};

/// A completed solution: pairwise-disjoint word masks in canonical
/// (ascending mask value) order.
pub type Solution = Vec<LetterMask>;

/// One seeded search run: partial solutions anchored on words whose rarest
/// letter holds `start_rank` in the rarity order, widened with `window`
/// frontier letters per step.
///
/// A window of 1 is a strict optimization that is only exhaustive when the
/// anchor letter's candidate pool is provably small enough that no valid
/// combination can skip past the single frontier letter; 2 is the safe
/// general choice for the classic 25-of-26 search.
#[derive(Debug, Clone, Copy)]
pub struct SeedRun {
    pub start_rank: usize,
    pub window: usize,
}

/// Run parameters, validated before the search starts.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub word_length: usize,
    pub words_per_solution: usize,
    pub runs: Vec<SeedRun>,
    /// Checked only between widening steps; a step itself is never
    /// interrupted.
    pub time_budget: Option<Duration>,
}

impl SearchParams {
    /// The tuned configuration for the classic 5x5 puzzle: the rarest
    /// letter anchored with a two-letter frontier, the second-rarest with
    /// one. Exactly one letter goes unused in a 25-letter solution, so
    /// every solution contains at least one of the two rarest letters and
    /// the two runs together cover the whole solution set.
    pub fn classic() -> Self {
        Self {
            word_length: WORD_LENGTH,
            words_per_solution: WORDS_PER_SOLUTION,
            runs: vec![
                SeedRun { start_rank: 0, window: 2 },
                SeedRun { start_rank: 1, window: 1 },
            ],
            time_budget: None,
        }
    }

    /// Reject misconfiguration up front rather than produce silently wrong
    /// results.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.word_length > 0, "word length must be at least 1");
        ensure!(
            self.words_per_solution > 0,
            "words per solution must be at least 1"
        );
        ensure!(
            self.word_length * self.words_per_solution <= ALPHABET_SIZE,
            "{} words of {} distinct letters would need more than {} letters",
            self.words_per_solution,
            self.word_length,
            ALPHABET_SIZE
        );
        ensure!(!self.runs.is_empty(), "at least one seed run is required");
        for run in &self.runs {
            ensure!(
                run.window >= 1 && run.window < ALPHABET_SIZE,
                "frontier window {} out of range (1..{})",
                run.window,
                ALPHABET_SIZE
            );
            ensure!(
                run.start_rank < ALPHABET_SIZE,
                "start rank {} out of range (0..{})",
                run.start_rank,
                ALPHABET_SIZE
            );
        }
        Ok(())
    }
}

/// Immutable search inputs: the candidate set and the rarity ranking
/// derived from it. Built once, shared by every run.
#[derive(Debug, Clone)]
pub struct SearchContext {
    candidates: Vec<LetterMask>,
    ranking: RarityRanking,
}

impl SearchContext {
    pub fn new(candidates: Vec<LetterMask>) -> Self {
        let ranking = RarityRanking::from_candidates(&candidates);
        Self {
            candidates,
            ranking,
        }
    }

    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self::new(corpus.candidates().to_vec())
    }

    pub fn candidates(&self) -> &[LetterMask] {
        &self.candidates
    }

    pub fn ranking(&self) -> &RarityRanking {
        &self.ranking
    }
}

/// An ordered, pairwise letter-disjoint sequence of word masks, with the
/// union of its letters cached. Never mutated in place; each widening step
/// builds the next generation from scratch.
#[derive(Debug, Clone)]
pub struct PartialSolution {
    words: Vec<LetterMask>,
    combined: LetterMask,
}

impl PartialSolution {
    fn seed(word: LetterMask) -> Self {
        Self {
            words: vec![word],
            combined: word,
        }
    }

    fn extend(&self, word: LetterMask) -> Self {
        debug_assert!(self.combined.is_disjoint(word));
        let mut words = self.words.clone();
        words.push(word);
        Self {
            words,
            combined: self.combined | word,
        }
    }

    pub fn words(&self) -> &[LetterMask] {
        &self.words
    }

    /// Union of all letters committed so far. Equal to the XOR of the
    /// words as well, since they are pairwise disjoint.
    pub fn combined(&self) -> LetterMask {
        self.combined
    }

    /// The word this run started from. Word order is preserved across
    /// steps, so this always carries the run's anchor letter.
    fn anchor(&self) -> LetterMask {
        self.words[0]
    }

    /// Words sorted ascending by mask value: the order-independent
    /// identity used for deduplication.
    fn canonical(&self) -> Solution {
        let mut words = self.words.clone();
        words.sort_unstable();
        words
    }
}

/// The up-to-`window` unused letters whose rarity ranks most closely
/// follow the rarest letter already committed to `combined`.
///
/// Requiring the next word to contain one of these letters fixes a
/// canonical rarest-first enumeration order, so a given word set is only
/// ever discovered along one ordering path (up to the slack a window
/// greater than 1 introduces, which deduplication absorbs).
pub fn frontier(combined: LetterMask, ranking: &RarityRanking, window: usize) -> Vec<LetterMask> {
    let min_rank = ranking.min_rank(combined);
    let mut letters = Vec::with_capacity(window);
    for rank in min_rank + 1..ALPHABET_SIZE {
        let letter = ranking.letter_at(rank);
        if combined.is_disjoint(letter) {
            letters.push(letter);
            if letters.len() == window {
                break;
            }
        }
    }
    letters
}

/// One widening step: grow every k-word partial solution into all valid
/// (k+1)-word partial solutions.
///
/// Partial solutions that differ only in word order share a combined mask,
/// so frontier computation and candidate filtering run once per unique
/// combined mask and fan back out afterwards. A branch with no valid
/// continuation simply produces nothing.
pub fn expand(
    ctx: &SearchContext,
    partials: &[PartialSolution],
    window: usize,
) -> Vec<PartialSolution> {
    let unique: Vec<LetterMask> = partials
        .iter()
        .map(|p| p.combined())
        .sorted()
        .dedup()
        .collect();

    let frontiers: Vec<LetterMask> = unique
        .iter()
        .map(|&combined| {
            frontier(combined, ctx.ranking(), window)
                .into_iter()
                .fold(LetterMask::EMPTY, |acc, letter| acc | letter)
        })
        .collect();

    // Anchors all contain the run's start letter, so no anchor can ever be
    // a valid continuation; dropping them up front shrinks the pool.
    let anchors: HashSet<LetterMask> = partials.iter().map(|p| p.anchor()).collect();

    // A continuation's own rarest letter always lands inside some current
    // frontier; anything else either breaks the canonical order or belongs
    // to a run seeded at a rarer rank.
    let frontier_union = frontiers
        .iter()
        .fold(LetterMask::EMPTY, |acc, &f| acc | f);
    let pool: Vec<LetterMask> = ctx
        .candidates()
        .iter()
        .copied()
        .filter(|c| !anchors.contains(c))
        .filter(|&c| ctx.ranking().rarest_letter(c).intersects(frontier_union))
        .collect();

    let accepted: HashMap<LetterMask, Vec<LetterMask>> = unique
        .par_iter()
        .zip(frontiers.par_iter())
        .map(|(&combined, &front)| {
            let next: Vec<LetterMask> = pool
                .iter()
                .copied()
                .filter(|&word| combined.is_disjoint(word) && word.intersects(front))
                .collect();
            (combined, next)
        })
        .collect();

    let mut next_generation = Vec::new();
    for partial in partials {
        if let Some(words) = accepted.get(&partial.combined()) {
            for &word in words {
                next_generation.push(partial.extend(word));
            }
        }
    }
    next_generation
}

/// All one-word partial solutions whose rarest letter holds exactly
/// `start_rank` in the rarity order.
pub fn seeds(ctx: &SearchContext, start_rank: usize) -> Vec<PartialSolution> {
    let anchor_letter = ctx.ranking().letter_at(start_rank);
    ctx.candidates()
        .iter()
        .copied()
        .filter(|&c| ctx.ranking().rarest_letter(c) == anchor_letter)
        .map(PartialSolution::seed)
        .collect()
}

/// Drive every configured seed run to full solutions, then merge,
/// canonicalize, and deduplicate across runs.
///
/// An empty result is a valid outcome, not an error. Exceeding the time
/// budget is an error; the check sits between widening steps only.
pub fn solve(ctx: &SearchContext, params: &SearchParams) -> Result<Vec<Solution>> {
    params.validate()?;
    let deadline = params.time_budget.map(|budget| Instant::now() + budget);

    let mut solutions: Vec<Solution> = Vec::new();
    for run in &params.runs {
        let mut generation = seeds(ctx, run.start_rank);
        for _ in 1..params.words_per_solution {
            check_deadline(deadline)?;
            if generation.is_empty() {
                break;
            }
            generation = expand(ctx, &generation, run.window);
            // A window above 1 can reach the same word multiset along more
            // than one path; dedup eagerly to bound the generation size.
            if run.window > 1 {
                generation = dedup_generation(generation);
            }
        }
        solutions.extend(
            generation
                .iter()
                .filter(|p| p.words().len() == params.words_per_solution)
                .map(PartialSolution::canonical),
        );
    }

    solutions.sort_unstable();
    solutions.dedup();
    Ok(solutions)
}

/// Sweep every start rank with a uniform window and merge the results.
/// Exhaustive whenever the window is wide enough for the corpus; intended
/// for small synthetic alphabets where that bound is checkable by hand.
pub fn solve_all(
    ctx: &SearchContext,
    word_length: usize,
    words_per_solution: usize,
    window: usize,
) -> Result<Vec<Solution>> {
    let runs = (0..ALPHABET_SIZE)
        .map(|start_rank| SeedRun { start_rank, window })
        .collect();
    let params = SearchParams {
        word_length,
        words_per_solution,
        runs,
        time_budget: None,
    };
    solve(ctx, &params)
}

fn dedup_generation(generation: Vec<PartialSolution>) -> Vec<PartialSolution> {
    let mut seen: HashSet<Solution> = HashSet::with_capacity(generation.len());
    generation
        .into_iter()
        .filter(|p| seen.insert(p.canonical()))
        .collect()
}

fn check_deadline(deadline: Option<Instant>) -> Result<()> {
    if let Some(deadline) = deadline {
        if Instant::now() >= deadline {
            bail!("time budget exhausted between widening steps");
        }
    }
    Ok(())
}
