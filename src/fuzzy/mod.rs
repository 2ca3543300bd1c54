// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: the predicate and the metric.
//!
//! Two pieces here: a greedy subsequence scan that decides whether a query
//! fits inside a candidate (and how many characters it skipped doing so), and
//! a general Levenshtein distance for scoring arbitrary pairs.

mod levenshtein;
mod subsequence;

pub use levenshtein::*;
pub use subsequence::*;
