// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Variant-aware entry points: where transforms meet the matcher.
//!
//! Every operation here runs the caller's text through a [`Variant`] first and
//! then hands it to the plain algorithms in [`crate::fuzzy`]. There is one
//! matcher and one ranker; the four behaviours (plain, fold, normalized,
//! normalized+fold) are just four flag settings.

mod bulk;

pub use bulk::*;

use std::borrow::Cow;

use crate::contracts::check_rank_consistent;
use crate::fuzzy::{is_match, rank_match};
use crate::util::normalize::Variant;

/// Does `query` fuzzy-match `candidate` under `variant`?
///
/// ```
/// use sift::{matches, Variant};
///
/// assert!(matches("limón", "LiMóN tArT", Variant::NORMALIZED_FOLD));
/// assert!(!matches("limón", "LiMóN tArT", Variant::NORMALIZED));
/// ```
pub fn matches(query: &str, candidate: &str, variant: Variant) -> bool {
    PreparedQuery::new(query, variant).matches(candidate)
}

/// Scan-derived distance of `candidate` from `query` under `variant`, or
/// `None` when they do not match.
///
/// Both strings are transformed before scanning, so the count is in
/// transformed code points: `rank("limó", "LIMON TART", NORMALIZED_FOLD)` is
/// 6, the length of `"n tart"`.
pub fn rank(query: &str, candidate: &str, variant: Variant) -> Option<usize> {
    PreparedQuery::new(query, variant).rank(candidate)
}

/// A query transformed once and reused against many candidates.
#[derive(Debug, Clone)]
pub(crate) struct PreparedQuery<'q> {
    text: Cow<'q, str>,
    variant: Variant,
}

impl<'q> PreparedQuery<'q> {
    pub(crate) fn new(query: &'q str, variant: Variant) -> Self {
        Self {
            text: variant.apply(query),
            variant,
        }
    }

    pub(crate) fn matches(&self, candidate: &str) -> bool {
        is_match(&self.text, &self.variant.apply(candidate))
    }

    pub(crate) fn rank(&self, candidate: &str) -> Option<usize> {
        let candidate = self.variant.apply(candidate);
        let distance = rank_match(&self.text, &candidate);
        check_rank_consistent(&self.text, &candidate, distance);
        distance
    }
}
