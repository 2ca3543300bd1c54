// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String processing helpers.
//!
//! Everything that rewrites text before it reaches the matcher lives here:
//! Unicode normalization for accent-insensitive search and case folding.

pub mod normalize;
