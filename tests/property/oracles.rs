//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that the optimized code must
//! agree with on every generated input.

use proptest::prelude::*;
use sift::{is_match, levenshtein_distance, rank_match};

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Subsequence test via longest common subsequence.
///
/// `query` is a subsequence of `candidate` iff their LCS is all of `query`.
/// O(nm), no greedy reasoning involved.
pub fn oracle_is_subsequence(query: &str, candidate: &str) -> bool {
    let q: Vec<char> = query.chars().collect();
    let c: Vec<char> = candidate.chars().collect();

    let mut table = vec![vec![0usize; c.len() + 1]; q.len() + 1];
    for i in 1..=q.len() {
        for j in 1..=c.len() {
            table[i][j] = if q[i - 1] == c[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    table[q.len()][c.len()] == q.len()
}

/// Classic Levenshtein edit distance over the full DP matrix.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[i][j] = (table[i - 1][j] + 1) // deletion
                .min(table[i][j - 1] + 1) // insertion
                .min(table[i - 1][j - 1] + cost); // substitution
        }
    }

    table[a.len()][b.len()]
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Short strings over a small alphabet so matches are common.
fn small_alphabet() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,6}").unwrap()
}

/// Strings mixing one-, two-, three- and four-byte characters.
fn mixed_width() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'é', 'ё', 'л', '中', '国', 'イ', '😀', 'Ⱦ']),
        0..8,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![small_alphabet(), mixed_width(), any::<String>()]
}

// =============================================================================
// DIFFERENTIAL TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_levenshtein_matches_strsim(a in any_text(), b in any_text()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_levenshtein_matches_oracle(a in mixed_width(), b in mixed_width()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), oracle_levenshtein(&a, &b));
    }

    #[test]
    fn prop_is_match_matches_oracle(q in small_alphabet(), c in small_alphabet()) {
        prop_assert_eq!(is_match(&q, &c), oracle_is_subsequence(&q, &c));
    }

    #[test]
    fn prop_is_match_matches_oracle_mixed_width(q in mixed_width(), c in mixed_width()) {
        prop_assert_eq!(is_match(&q, &c), oracle_is_subsequence(&q, &c));
    }

    /// A matched pair is exactly the deletions of the unmatched candidate
    /// characters apart, so the scan rank is the edit distance.
    #[test]
    fn prop_rank_is_edit_distance_on_match(q in any_text(), c in any_text()) {
        if let Some(rank) = rank_match(&q, &c) {
            prop_assert_eq!(rank, oracle_levenshtein(&q, &c));
        }
    }
}

#[test]
fn test_oracles_agree_with_vectors() {
    for &(query, candidate, matched, _) in super::common::MATCH_VECTORS {
        assert_eq!(oracle_is_subsequence(query, candidate), matched);
    }
    for &(a, b, distance) in super::common::DISTANCE_VECTORS {
        assert_eq!(oracle_levenshtein(a, b), distance);
    }
}
