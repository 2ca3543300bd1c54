// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy subsequence matching and edit-distance ranking.
//!
//! Given a short query and a candidate, decide whether the query's characters
//! appear in the candidate in order (gaps allowed), and when they do, say how
//! close the match is in Levenshtein edits. Built for filtering lists quickly
//! on lightweight user input: `twl` finds `cartwheel`, `whl` ranks `wheel`
//! above `cartwheel`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌───────────────────┐
//! │ util::normalize  │────▶│     search       │────▶│  scoring::ranking │
//! │ (Variant: fold,  │     │ (matches, rank,  │     │  (Rank, sort by   │
//! │  normalize)      │     │  find_all,       │     │   distance)       │
//! └──────────────────┘     │  rank_all)       │     └───────────────────┘
//!                          └──────────────────┘
//!                                   │
//!                                   ▼
//!                 ┌──────────────────────────────────┐
//!                 │              fuzzy               │
//!                 │  (is_match, rank_match,          │
//!                 │   levenshtein_distance)          │
//!                 └──────────────────────────────────┘
//! ```
//!
//! All operations are pure: they borrow their inputs, return fresh output,
//! and are safe to call from any number of threads at once.
//!
//! # Usage
//!
//! ```
//! use sift::{find_all, rank_all, sort_by_distance, Variant};
//!
//! let candidates = ["cartwheel", "foobar", "wheel", "baz"];
//!
//! assert_eq!(find_all("whl", &candidates, Variant::PLAIN), [&"cartwheel", &"wheel"]);
//!
//! let mut ranks = rank_all("whl", &candidates, Variant::PLAIN);
//! sort_by_distance(&mut ranks);
//! assert_eq!(*ranks[0].candidate, "wheel");
//! ```

// Module declarations
pub mod candidate;
pub mod contracts;
pub mod fuzzy;
pub mod scoring;
pub mod search;
#[doc(hidden)]
pub mod testing;
pub mod util;

// Re-exports for public API
pub use candidate::{Candidate, Displayed};
pub use fuzzy::{is_match, levenshtein_distance, rank_match};
pub use scoring::{compare_ranks, sort_by_distance, Rank, Ranks};
pub use search::{find_all, matches, rank, rank_all, PARALLEL_THRESHOLD};
pub use util::normalize::{ParseVariantError, Variant};
