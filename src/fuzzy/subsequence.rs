// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy leftmost subsequence matching.
//!
//! A query matches a candidate when its characters appear in the candidate in
//! the same order, gaps allowed: `twl` matches `car[t][w]hee[l]`. Each query
//! character binds to the earliest unconsumed candidate character equal to it,
//! and the search never backs up.
//!
//! Because only gaps are tolerated, a matched pair is always exactly
//! `chars(candidate) - chars(query)` deletions apart. [`rank_match`] reads that
//! number straight off the scan instead of running a second pass.

/// Is `query` an ordered, possibly gapped subsequence of `candidate`?
///
/// The empty query matches everything.
///
/// ```
/// use sift::is_match;
///
/// assert!(is_match("twl", "cartwheel"));
/// assert!(!is_match("eeel", "cartwheel"));
/// ```
pub fn is_match(query: &str, candidate: &str) -> bool {
    if let Some(quick) = fast_path(query, candidate) {
        return quick.is_some();
    }

    let mut rest = candidate.chars();
    query.chars().all(|qc| rest.any(|cc| cc == qc))
}

/// Edit distance of a matched pair, derived from the scan, or `None` when
/// `query` is not a subsequence of `candidate`.
///
/// Counts one edit for every candidate character skipped while looking for
/// the next query character, plus one for every character left over after
/// the last match.
///
/// ```
/// use sift::rank_match;
///
/// assert_eq!(rank_match("twl", "cartwheel"), Some(6));
/// assert_eq!(rank_match("dog", "cartwheel"), None);
/// ```
pub fn rank_match(query: &str, candidate: &str) -> Option<usize> {
    if let Some(quick) = fast_path(query, candidate) {
        return quick;
    }

    let mut rest = candidate.chars();
    let mut skipped = 0;

    'query: for qc in query.chars() {
        for cc in rest.by_ref() {
            if cc == qc {
                continue 'query;
            }
            skipped += 1;
        }
        return None;
    }

    Some(skipped + rest.count())
}

/// Character positions in `candidate` that the query's characters bind to,
/// or `None` when there is no match.
///
/// Positions are code point indexes, strictly increasing, one per query
/// character.
///
/// ```
/// use sift::fuzzy::match_indices;
///
/// assert_eq!(match_indices("twl", "cartwheel"), Some(vec![3, 4, 8]));
/// ```
pub fn match_indices(query: &str, candidate: &str) -> Option<Vec<usize>> {
    let mut indices = Vec::with_capacity(query.len());
    let mut rest = candidate.chars().enumerate();

    for qc in query.chars() {
        let (position, _) = rest.by_ref().find(|&(_, cc)| cc == qc)?;
        indices.push(position);
    }

    Some(indices)
}

/// Decide the pair without scanning when possible.
///
/// `Some(None)`: cannot match. `Some(Some(d))`: settled with distance `d`.
/// `None`: scan needed.
///
/// Lengths are compared in code points, the unit the scan walks, never in
/// UTF-8 bytes.
fn fast_path(query: &str, candidate: &str) -> Option<Option<usize>> {
    if query.is_empty() {
        return Some(Some(char_len(candidate)));
    }
    if query == candidate {
        return Some(Some(0));
    }
    if char_len(query) > char_len(candidate) {
        return Some(None);
    }
    None
}

fn char_len(s: &str) -> usize {
    if s.is_ascii() {
        s.len()
    } else {
        s.chars().count()
    }
}
