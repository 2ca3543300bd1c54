// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked results and how they sort.
//!
//! A [`Rank`] pairs a query with one matching candidate and its edit distance.
//! Ordering is by distance alone, ascending. Ties keep their input order
//! because [`sort_by_distance`] is a stable sort and ranks are produced in
//! candidate order, so the effective tiebreaker is `original_index`.

use serde::Serialize;
use std::cmp::Ordering;

use crate::contracts::check_sorted_by_distance;

/// One scored match.
///
/// Borrows the query and the candidate from the caller; `original_index` is
/// the candidate's position in the slice that was searched.
#[derive(Debug, Serialize)]
pub struct Rank<'a, C: ?Sized = str> {
    pub query: &'a str,
    pub candidate: &'a C,
    pub distance: usize,
    pub original_index: usize,
}

// Manual impls: derives would demand `C: Clone`/`C: PartialEq` on the pointee
impl<C: ?Sized> Clone for Rank<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Rank<'_, C> {}

impl<C: PartialEq + ?Sized> PartialEq for Rank<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.query == other.query
            && self.candidate == other.candidate
            && self.distance == other.distance
            && self.original_index == other.original_index
    }
}

impl<C: Eq + ?Sized> Eq for Rank<'_, C> {}

/// Ranks in the order they were produced or sorted into.
pub type Ranks<'a, C = str> = Vec<Rank<'a, C>>;

/// Compare two ranks: smaller distance first.
///
/// This is the only ordering rule. Use it with a stable sort to keep ties in
/// their current order.
pub fn compare_ranks<C: ?Sized>(a: &Rank<'_, C>, b: &Rank<'_, C>) -> Ordering {
    a.distance.cmp(&b.distance)
}

/// Sort ranks by ascending distance, keeping equal distances in their current
/// relative order.
///
/// ```
/// use sift::{rank_all, sort_by_distance, Variant};
///
/// let candidates = ["cartwheel", "foobar", "wheel", "baz"];
/// let mut ranks = rank_all("whl", &candidates, Variant::PLAIN);
/// sort_by_distance(&mut ranks);
///
/// assert_eq!(*ranks[0].candidate, "wheel");
/// assert_eq!(ranks[0].distance, 2);
/// ```
pub fn sort_by_distance<C: ?Sized>(ranks: &mut [Rank<'_, C>]) {
    ranks.sort_by(compare_ranks);
    check_sorted_by_distance(ranks);
}
