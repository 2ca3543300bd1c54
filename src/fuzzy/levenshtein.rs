// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over a single rolling column.
//!
//! The textbook Wagner-Fischer table is `(m+1) x (n+1)`, but each cell only
//! looks at its left, upper and upper-left neighbours. Walking the longer string
//! as the outer loop and keeping one column sized to the shorter string gives
//! O(m·n) time in O(min(m, n)) space.
//!
//! Distances count Unicode scalar values, not bytes: `中国` → `中华人民共和国`
//! is 5 edits, not 15.

/// Minimum number of single-character insertions, deletions or substitutions
/// that turn `a` into `b`.
///
/// Symmetric in its arguments, zero only for equal strings, and equal to the
/// other string's length when one side is empty.
///
/// ```
/// use sift::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // The column is sized to the shorter string regardless of argument order
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    let mut column: Vec<usize> = (0..=short.len()).collect();

    for (x, &lc) in long.iter().enumerate() {
        column[0] = x + 1;
        let mut diagonal = x;

        for y in 1..=short.len() {
            let above = column[y];
            let cost = usize::from(short[y - 1] != lc);
            column[y] = (column[y] + 1) // deletion
                .min(column[y - 1] + 1) // insertion
                .min(diagonal + cost); // substitution
            diagonal = above;
        }
    }

    column[short.len()]
}
