// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for matching and ranking over arbitrary Unicode.
//!
//! Drives every public entry point with the same query and candidate list
//! and checks that they agree with each other. Multi-byte characters,
//! combining marks and case mappings that change width are where a byte
//! and character mix-up would show.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift::{
    find_all, is_match, levenshtein_distance, matches, rank, rank_all, rank_match,
    sort_by_distance, Variant,
};

#[derive(Debug, Arbitrary)]
struct FindInput {
    query: String,
    candidates: Vec<String>,
    fold: bool,
    normalize: bool,
}

/// Cap to `max` characters so the quadratic distance stays fast.
fn cap(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fuzz_target!(|input: FindInput| {
    let query = cap(&input.query, 16);
    let candidates: Vec<String> = input
        .candidates
        .iter()
        .take(64)
        .map(|c| cap(c, 64))
        .collect();
    let variant = Variant::default()
        .with_fold(input.fold)
        .with_normalize(input.normalize);

    // Single pair entry points agree
    for candidate in &candidates {
        let matched = matches(&query, candidate, variant);
        assert_eq!(rank(&query, candidate, variant).is_some(), matched);

        let plain = is_match(&query, candidate);
        assert_eq!(rank_match(&query, candidate).is_some(), plain);
        if let Some(distance) = rank_match(&query, candidate) {
            assert_eq!(distance, levenshtein_distance(&query, candidate));
        }
    }

    // Bulk results are the single pair results, in input order
    let hits = find_all(&query, &candidates, variant);
    let expected: Vec<&String> = candidates
        .iter()
        .filter(|c| matches(&query, c, variant))
        .collect();
    assert_eq!(hits, expected);

    let mut ranks = rank_all(&query, &candidates, variant);
    assert_eq!(ranks.len(), hits.len());
    for rank in &ranks {
        assert_eq!(
            rank.distance,
            levenshtein_distance(&query, &candidates[rank.original_index])
        );
    }

    sort_by_distance(&mut ranks);
    assert!(ranks.windows(2).all(|w| w[0].distance <= w[1].distance));
});
