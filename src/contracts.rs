//! Runtime contracts for the matching and ranking invariants.
//!
//! Debug-mode assertions that every public operation re-checks its own
//! output against. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail at the operation that broke the invariant, not three calls later
//!
//! # Invariants
//!
//! | Contract Function             | Property                                               |
//! |-------------------------------|--------------------------------------------------------|
//! | `check_rank_consistent`       | a distance exists iff the subsequence predicate holds  |
//! | `check_distance_lower_bound`  | `distance >= abs(chars(a) - chars(b))`                 |
//! | `check_order_preserving`      | bulk output indexes are strictly increasing            |
//! | `check_sorted_by_distance`    | sorted ranks are non-decreasing in distance            |
//!
//! # Usage
//!
//! ```ignore
//! use sift::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_sorted_by_distance(&ranks);
//!
//! // In release builds, this is a no-op
//! ```

use crate::fuzzy::is_match;
use crate::scoring::Rank;

// ============================================================================
// SCALAR CONTRACTS
// ============================================================================

/// Check that a scan-derived distance agrees with the predicate.
///
/// `query` and `candidate` must already be transformed by the variant that
/// produced `distance`.
///
/// # Panics (debug builds only)
/// Panics if `distance.is_some() != is_match(query, candidate)`, or if a
/// present distance is not exactly the code point length difference.
#[inline]
pub fn check_rank_consistent(query: &str, candidate: &str, distance: Option<usize>) {
    debug_assert_eq!(
        distance.is_some(),
        is_match(query, candidate),
        "INVARIANT VIOLATED: rank {:?} disagrees with the matcher for query={:?} candidate={:?}",
        distance,
        query,
        candidate
    );
    debug_assert!(
        distance.map_or(true, |d| {
            d == candidate.chars().count() - query.chars().count()
        }),
        "INVARIANT VIOLATED: matched rank {:?} is not a pure deletion count for query={:?} candidate={:?}",
        distance,
        query,
        candidate
    );
}

/// Check the length-difference lower bound on an edit distance.
///
/// # Panics (debug builds only)
/// Panics if `distance < |chars(a) - chars(b)|`.
#[inline]
pub fn check_distance_lower_bound(a: &str, b: &str, distance: usize) {
    debug_assert!(
        distance >= a.chars().count().abs_diff(b.chars().count()),
        "INVARIANT VIOLATED: distance {} below length difference for {:?} / {:?}",
        distance,
        a,
        b
    );
}

// ============================================================================
// COLLECTION CONTRACTS
// ============================================================================

/// Check that bulk output kept the input order.
///
/// # Panics (debug builds only)
/// Panics if the indexes are not strictly increasing.
#[inline]
pub fn check_order_preserving<I>(indexes: I)
where
    I: IntoIterator<Item = usize>,
{
    if cfg!(debug_assertions) {
        let mut prev: Option<usize> = None;
        for (position, index) in indexes.into_iter().enumerate() {
            if let Some(p) = prev {
                assert!(
                    index > p,
                    "INVARIANT VIOLATED: output position {} has index {} after {}",
                    position,
                    index,
                    p
                );
            }
            prev = Some(index);
        }
    }
}

/// Check that ranks are in ascending distance order.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_sorted_by_distance<C: ?Sized>(ranks: &[Rank<'_, C>]) {
    debug_assert!(
        ranks.windows(2).all(|w| w[0].distance <= w[1].distance),
        "INVARIANT VIOLATED: ranks not sorted by distance"
    );
}
