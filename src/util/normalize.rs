// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text transforms applied to both sides of a comparison.
//!
//! Two independent switches, four behaviours:
//!
//! | `normalize` | `fold` | `"limó"` vs `"LIMON"` | `"whél"` vs `"cartwheel"` |
//! |-------------|--------|-----------------------|---------------------------|
//! | off         | off    | no                    | no                        |
//! | off         | on     | no                    | no                        |
//! | on          | off    | no                    | yes                       |
//! | on          | on     | yes                   | yes                       |
//!
//! Normalization runs before folding. Decomposing first means an accented
//! capital folds the same way whether it arrived composed or decomposed.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

/// Which transforms to apply before matching and ranking.
///
/// The default is the plain variant: exact code-point comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    /// Erase case distinctions (`"LIMON"` == `"limon"`).
    pub fold: bool,
    /// Canonicalize and strip diacritics (`"limón"` == `"limon"`).
    pub normalize: bool,
}

impl Variant {
    pub const PLAIN: Variant = Variant {
        fold: false,
        normalize: false,
    };
    pub const FOLD: Variant = Variant {
        fold: true,
        normalize: false,
    };
    pub const NORMALIZED: Variant = Variant {
        fold: false,
        normalize: true,
    };
    pub const NORMALIZED_FOLD: Variant = Variant {
        fold: true,
        normalize: true,
    };

    pub fn with_fold(mut self, fold: bool) -> Self {
        self.fold = fold;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// True when [`Variant::apply`] never allocates.
    pub fn is_plain(&self) -> bool {
        !self.fold && !self.normalize
    }

    /// Rewrite `value` according to this variant.
    ///
    /// Borrows when nothing would change, so the plain variant and
    /// already-lowercase ASCII input under `fold` cost nothing.
    pub fn apply<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.is_plain() {
            return Cow::Borrowed(value);
        }

        let normalized = if self.normalize {
            strip_diacritics(value)
        } else {
            Cow::Borrowed(value)
        };

        if !self.fold {
            return normalized;
        }

        match normalized {
            Cow::Borrowed(text) => fold_case(text),
            Cow::Owned(text) => match fold_case(&text) {
                Cow::Borrowed(_) => Cow::Owned(text),
                Cow::Owned(folded) => Cow::Owned(folded),
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match (self.normalize, self.fold) {
            (false, false) => "plain",
            (false, true) => "fold",
            (true, false) => "normalized",
            (true, true) => "normalized-fold",
        };
        f.write_str(name)
    }
}

/// Error returned when a variant name is not one of the four known spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError(String);

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown variant '{}' (expected plain, fold, normalized or normalized-fold)",
            self.0
        )
    }
}

impl std::error::Error for ParseVariantError {}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "none" => Ok(Variant::PLAIN),
            "fold" => Ok(Variant::FOLD),
            "normalized" | "normalize" => Ok(Variant::NORMALIZED),
            "normalized-fold" | "normalized_fold" | "normalize-fold" => {
                Ok(Variant::NORMALIZED_FOLD)
            }
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

/// Decompose, drop nonspacing marks (General_Category=Mn), recompose.
///
/// This makes composed and decomposed spellings identical and also erases
/// accents entirely:
/// - "café" → "cafe"
/// - "tummalachērla" → "tummalacherla"
/// - "cartwhe\u{301}e\u{301}l" → "cartwheel"
///
/// Spacing marks (Mc) stay. In Indic scripts they are vowels, so "कि" and
/// "का" remain different.
pub fn strip_diacritics(value: &str) -> Cow<'_, str> {
    // ASCII neither decomposes nor combines
    if value.is_ascii() {
        return Cow::Borrowed(value);
    }

    let stripped: String = value
        .nfd()
        .filter(|c| !c.is_mark_nonspacing())
        .nfc()
        .collect();

    if stripped == value {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(stripped)
    }
}

/// Per-code-point lowercase mapping.
///
/// Uses `char::to_lowercase` rather than `str::to_lowercase` so the mapping
/// is context-free: a trailing `Σ` folds to `σ` the same as any other.
pub fn fold_case(value: &str) -> Cow<'_, str> {
    if value.is_ascii() {
        if value.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Owned(value.to_ascii_lowercase());
        }
        return Cow::Borrowed(value);
    }

    if !value.chars().any(lowercase_differs) {
        return Cow::Borrowed(value);
    }

    Cow::Owned(value.chars().flat_map(char::to_lowercase).collect())
}

// Covers titlecase digraphs (ǅ, ǈ) which are neither upper nor lower
fn lowercase_differs(c: char) -> bool {
    let mut lower = c.to_lowercase();
    !(lower.next() == Some(c) && lower.next().is_none())
}
