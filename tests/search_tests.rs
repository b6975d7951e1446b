use std::time::Duration;

use itertools::Itertools;
use quintwords::search::frontier;
use quintwords::{
    solve, solve_all, Corpus, LetterMask, SearchContext, SearchParams, SeedRun, Solution,
};

fn context(words: &[&str], word_length: usize) -> (Corpus, SearchContext) {
    let corpus = Corpus::from_words(words.iter().copied(), word_length);
    let ctx = SearchContext::from_corpus(&corpus);
    (corpus, ctx)
}

fn masks(words: &[&str]) -> Solution {
    let mut masks: Solution = words.iter().map(|w| LetterMask::encode(w)).collect();
    masks.sort_unstable();
    masks
}

// Corpus used throughout: counts d=1, f=1, a=b=c=e=2, everything else 0.
// Rarity ranks: g..z fill 0..19, then d=20, f=21, a=22, b=23, c=24, e=25.
const SINGLE_SOLUTION_WORDS: &[&str] = &["ab", "cd", "ef", "ac", "be"];

#[test]
fn test_ranking_orders_letters_by_rarity() {
    let (_, ctx) = context(SINGLE_SOLUTION_WORDS, 2);
    let ranking = ctx.ranking();

    // Unseen letters rank first, in stable letter order.
    assert_eq!(ranking.letter_at(0).decode(), "g");
    assert_eq!(ranking.letter_at(19).decode(), "z");
    assert_eq!(ranking.letter_at(20).decode(), "d");
    assert_eq!(ranking.letter_at(21).decode(), "f");
    assert_eq!(ranking.letter_at(22).decode(), "a");
    assert_eq!(ranking.letter_at(25).decode(), "e");

    assert_eq!(ranking.rank_of(3), 20); // 'd'
    assert_eq!(ranking.min_rank(LetterMask::encode("cd")), 20);
    assert_eq!(ranking.rarest_letter(LetterMask::encode("cd")).decode(), "d");
    assert_eq!(ranking.rarest_letter(LetterMask::encode("be")).decode(), "b");
}

#[test]
fn test_frontier_follows_rarest_committed_letter() {
    let (_, ctx) = context(SINGLE_SOLUTION_WORDS, 2);
    let ranking = ctx.ranking();
    let cd = LetterMask::encode("cd");

    let letters: Vec<String> = frontier(cd, ranking, 2)
        .into_iter()
        .map(|l| l.decode())
        .collect();
    assert_eq!(letters, vec!["f", "a"]);

    let letters: Vec<String> = frontier(cd, ranking, 1)
        .into_iter()
        .map(|l| l.decode())
        .collect();
    assert_eq!(letters, vec!["f"]);

    // Every nonzero-rarity letter already committed: nothing left.
    let full = LetterMask::encode("abcdef");
    assert!(frontier(full, ranking, 2).is_empty());
}

#[test]
fn test_single_solution_corpus() {
    let (_, ctx) = context(SINGLE_SOLUTION_WORDS, 2);
    let solutions = solve_all(&ctx, 2, 3, 2).unwrap();
    assert_eq!(solutions, vec![masks(&["ab", "cd", "ef"])]);
}

#[test]
fn test_multiple_solutions_reported_once_each() {
    // "bd" instead of "be" admits a second combination, {ac, bd, ef}.
    let (_, ctx) = context(&["ab", "cd", "ef", "ac", "bd"], 2);
    let solutions = solve_all(&ctx, 2, 3, 2).unwrap();
    assert_eq!(
        solutions,
        vec![masks(&["ab", "cd", "ef"]), masks(&["ac", "bd", "ef"])]
    );
}

#[test]
fn test_matches_brute_force() {
    let words = ["ab", "cd", "ef", "ac", "be", "df", "ad", "bc", "cf"];
    let (corpus, ctx) = context(&words, 2);

    let mut expected: Vec<Solution> = corpus
        .candidates()
        .iter()
        .copied()
        .combinations(3)
        .filter(|combo| {
            combo
                .iter()
                .tuple_combinations()
                .all(|(a, b)| a.is_disjoint(*b))
        })
        .map(|combo| {
            let mut combo = combo;
            combo.sort_unstable();
            combo
        })
        .collect();
    expected.sort_unstable();

    let solutions = solve_all(&ctx, 2, 3, 2).unwrap();
    assert!(!solutions.is_empty());
    assert_eq!(solutions, expected);
}

#[test]
fn test_window_size_does_not_change_solution_set() {
    // Every solution here uses all six candidate letters, so even a
    // width-1 frontier cannot skip one.
    let words = ["ab", "cd", "ef", "ac", "be", "df", "ad", "bc", "cf"];
    let (_, ctx) = context(&words, 2);

    let narrow = solve_all(&ctx, 2, 3, 1).unwrap();
    let default = solve_all(&ctx, 2, 3, 2).unwrap();
    let wide = solve_all(&ctx, 2, 3, 3).unwrap();

    assert_eq!(narrow, default);
    assert_eq!(default, wide);
}

#[test]
fn test_five_word_solution_properties() {
    let words = [
        "fjord", "gucks", "nymph", "vibex", "waltz", "crane", "slate",
    ];
    let (corpus, ctx) = context(&words, 5);
    let solutions = solve_all(&ctx, 5, 5, 2).unwrap();

    assert_eq!(
        solutions,
        vec![masks(&["fjord", "gucks", "nymph", "vibex", "waltz"])]
    );

    for solution in &solutions {
        for (a, b) in solution.iter().tuple_combinations() {
            assert!(a.is_disjoint(*b));
        }
        let combined = solution
            .iter()
            .fold(LetterMask::EMPTY, |acc, &m| acc | m);
        assert_eq!(combined.count(), 25);
    }

    let rows = quintwords::output::expand_rows(&corpus, &solutions);
    assert_eq!(rows.len(), 1);
    let mut row_words: Vec<&str> = rows[0].split(',').collect();
    row_words.sort_unstable();
    assert_eq!(row_words, vec!["fjord", "gucks", "nymph", "vibex", "waltz"]);
}

#[test]
fn test_anagram_cross_product_expansion() {
    let (corpus, ctx) = context(&["ab", "ba", "cd", "ef", "ac", "be"], 2);
    let solutions = solve_all(&ctx, 2, 3, 2).unwrap();
    assert_eq!(solutions.len(), 1);

    let mut rows = quintwords::output::expand_rows(&corpus, &solutions);
    rows.sort_unstable();
    assert_eq!(rows, vec!["ab,cd,ef", "ba,cd,ef"]);
}

#[test]
fn test_deterministic_across_runs() {
    let words = ["ab", "cd", "ef", "ac", "be", "df", "ad", "bc", "cf"];
    let (corpus, ctx) = context(&words, 2);

    let first = solve_all(&ctx, 2, 3, 2).unwrap();
    let second = solve_all(&ctx, 2, 3, 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        quintwords::output::expand_rows(&corpus, &first),
        quintwords::output::expand_rows(&corpus, &second)
    );
}

#[test]
fn test_no_valid_combination_yields_empty_result() {
    let (_, ctx) = context(&["ab", "bc", "cd"], 2);
    let solutions = solve_all(&ctx, 2, 3, 2).unwrap();
    assert!(solutions.is_empty());
}

#[test]
fn test_rejects_oversized_parameters() {
    let (_, ctx) = context(&["ab"], 2);
    let params = SearchParams {
        word_length: 5,
        words_per_solution: 6,
        runs: vec![SeedRun { start_rank: 0, window: 2 }],
        time_budget: None,
    };
    assert!(solve(&ctx, &params).is_err());
}

#[test]
fn test_rejects_bad_window_and_start_rank() {
    let (_, ctx) = context(&["ab"], 2);

    for run in [
        SeedRun { start_rank: 0, window: 0 },
        SeedRun { start_rank: 0, window: 26 },
        SeedRun { start_rank: 26, window: 2 },
    ] {
        let params = SearchParams {
            word_length: 2,
            words_per_solution: 3,
            runs: vec![run],
            time_budget: None,
        };
        assert!(solve(&ctx, &params).is_err(), "accepted {run:?}");
    }
}

#[test]
fn test_time_budget_checked_between_steps() {
    let (_, ctx) = context(SINGLE_SOLUTION_WORDS, 2);
    let params = SearchParams {
        word_length: 2,
        words_per_solution: 3,
        runs: vec![SeedRun { start_rank: 20, window: 2 }],
        time_budget: Some(Duration::ZERO),
    };
    assert!(solve(&ctx, &params).is_err());
}
