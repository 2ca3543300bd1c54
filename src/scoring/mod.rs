// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: turning matches into an ordered list.
//!
//! Distance is the only score. Lower is closer; zero means identical under
//! the variant that produced it.

pub mod ranking;

pub use ranking::*;
