// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One query against many candidates.
//!
//! The query is transformed once per call. Each candidate is compared
//! independently, so large lists fan out across rayon's pool when the
//! `parallel` feature is on. Output order is always input order: rayon's
//! `collect` into a `Vec` keeps it, and the sequential path trivially does.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::PreparedQuery;
use crate::candidate::Candidate;
use crate::contracts::{check_distance_lower_bound, check_order_preserving};
use crate::fuzzy::levenshtein_distance;
use crate::scoring::{Rank, Ranks};
use crate::util::normalize::Variant;

/// Below this many candidates the work is too small to be worth splitting.
pub const PARALLEL_THRESHOLD: usize = 1024;

/// Every candidate that fuzzy-matches `query`, in input order.
///
/// ```
/// use sift::{find_all, Variant};
///
/// let candidates = ["cartwheel", "foobar", "wheel", "baz"];
/// let hits = find_all("whel", &candidates, Variant::PLAIN);
/// assert_eq!(hits, [&"cartwheel", &"wheel"]);
/// ```
pub fn find_all<'a, C>(query: &str, candidates: &'a [C], variant: Variant) -> Vec<&'a C>
where
    C: Candidate + Sync,
{
    let prepared = PreparedQuery::new(query, variant);

    let hits = scan_candidates(candidates, |index, candidate| {
        prepared
            .matches(&candidate.text())
            .then_some((index, candidate))
    });

    check_order_preserving(hits.iter().map(|(index, _)| *index));
    debug!(
        candidates = candidates.len(),
        matches = hits.len(),
        %variant,
        "find_all"
    );

    hits.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Every matching candidate paired with its Levenshtein distance from
/// `query`, in input order.
///
/// `variant` decides which candidates match. The distance is then measured
/// between the caller's original strings, so `"limó"` against `"limon"` under
/// [`Variant::NORMALIZED`] matches but scores 2, not 1.
///
/// Pass the result to [`crate::sort_by_distance`] to put the closest first.
pub fn rank_all<'a, C>(query: &'a str, candidates: &'a [C], variant: Variant) -> Ranks<'a, C>
where
    C: Candidate + Sync,
{
    let prepared = PreparedQuery::new(query, variant);

    let ranks = scan_candidates(candidates, |index, candidate| {
        let text = candidate.text();
        if !prepared.matches(&text) {
            return None;
        }

        let distance = levenshtein_distance(query, &text);
        check_distance_lower_bound(query, &text, distance);

        Some(Rank {
            query,
            candidate,
            distance,
            original_index: index,
        })
    });

    check_order_preserving(ranks.iter().map(|rank| rank.original_index));
    debug!(
        candidates = candidates.len(),
        matches = ranks.len(),
        %variant,
        "rank_all"
    );

    ranks
}

/// Apply `f` to every `(index, candidate)` and keep the `Some` results, in
/// input order.
fn scan_candidates<'a, C, T, F>(candidates: &'a [C], f: F) -> Vec<T>
where
    C: Sync,
    T: Send,
    F: Fn(usize, &'a C) -> Option<T> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if candidates.len() >= PARALLEL_THRESHOLD {
            return candidates
                .par_iter()
                .enumerate()
                .filter_map(|(index, candidate)| f(index, candidate))
                .collect();
        }
    }

    candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| f(index, candidate))
        .collect()
}
