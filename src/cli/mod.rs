// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sift command-line interface.
//!
//! Five subcommands that map one-to-one onto the library: `match` and `rank`
//! for a single pair, `distance` for raw Levenshtein, and `find` / `rank-all`
//! for filtering a list of candidates read from a file or stdin, one per line.

pub mod display;

use clap::{Args, Parser, Subcommand};
use sift::Variant;

#[derive(Parser)]
#[command(
    name = "sift",
    about = "Fuzzy subsequence matching and edit-distance ranking",
    version
)]
pub struct Cli {
    /// Log at debug level (SIFT_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether QUERY fuzzy-matches CANDIDATE (prints true/false)
    Match {
        query: String,
        candidate: String,

        #[command(flatten)]
        variant: VariantArgs,
    },

    /// Scan-derived distance of a matched pair, or -1 when it does not match
    Rank {
        query: String,
        candidate: String,

        #[command(flatten)]
        variant: VariantArgs,
    },

    /// Levenshtein distance between two strings
    Distance { a: String, b: String },

    /// Print every candidate that fuzzy-matches QUERY, in input order
    Find {
        query: String,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        variant: VariantArgs,

        /// Emit a JSON array instead of one candidate per line
        #[arg(long)]
        json: bool,
    },

    /// Rank every matching candidate by Levenshtein distance from QUERY
    RankAll {
        query: String,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        variant: VariantArgs,

        /// Sort by ascending distance (ties keep input order)
        #[arg(short, long)]
        sort: bool,

        /// Keep at most N results (applied after sorting)
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,

        /// Drop results further than N edits away
        #[arg(long, value_name = "N")]
        max_distance: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Which transforms to apply, either as flags or by name.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct VariantArgs {
    /// Ignore case
    #[arg(short = 'i', long)]
    pub fold: bool,

    /// Ignore accents and composed/decomposed differences
    #[arg(short = 'n', long)]
    pub normalize: bool,

    /// Variant by name: plain, fold, normalized, normalized-fold
    #[arg(long, value_name = "NAME", conflicts_with_all = ["fold", "normalize"])]
    pub variant: Option<Variant>,
}

impl VariantArgs {
    pub fn resolve(&self) -> Variant {
        self.variant.unwrap_or_else(|| {
            Variant::default()
                .with_fold(self.fold)
                .with_normalize(self.normalize)
        })
    }
}

/// Where candidates come from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Read candidates from FILE, one per line (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,
}
