// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sift CLI.
//!
//! Matched characters are painted so you can see where the query landed
//! inside each candidate, and distances are colored by closeness. Respects
//! `NO_COLOR` and turns itself off when stdout is not a TTY, so piping into
//! another tool gets plain text. `SIFT_THEME=light` switches to a palette
//! readable on light backgrounds.

use std::sync::OnceLock;

use sift::fuzzy::match_indices;
use sift::Variant;

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

type Rgb = (u8, u8, u8);

/// Colors for the three distance buckets plus matched and secondary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub near: Rgb,
    pub mid: Rgb,
    pub far: Rgb,
    pub dim: Rgb,
}

/// OneDark
const DARK: Palette = Palette {
    near: (152, 195, 121),
    mid: (229, 192, 123),
    far: (224, 108, 117),
    dim: (92, 99, 112),
};

/// One Light
const LIGHT: Palette = Palette {
    near: (80, 161, 79),
    mid: (193, 132, 1),
    far: (228, 86, 73),
    dim: (160, 161, 167),
};

impl Palette {
    /// Pick a palette from a `SIFT_THEME` value; anything but "light" is dark.
    pub fn from_theme(theme: Option<&str>) -> Self {
        match theme {
            Some(name) if name.eq_ignore_ascii_case("light") => LIGHT,
            _ => DARK,
        }
    }

    /// Color for a distance: near for 0..=2, mid for 3..=6, far beyond.
    pub fn for_distance(&self, distance: usize) -> Rgb {
        match distance {
            0..=2 => self.near,
            3..=6 => self.mid,
            _ => self.far,
        }
    }
}

fn palette() -> &'static Palette {
    static PALETTE: OnceLock<Palette> = OnceLock::new();
    PALETTE.get_or_init(|| Palette::from_theme(std::env::var("SIFT_THEME").ok().as_deref()))
}

fn rgb((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(color: Rgb, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", rgb(color), text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// MATCH RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Render `candidate` with the characters `query` bound to highlighted.
///
/// Highlighting needs a one-to-one character mapping between the original
/// and transformed candidate. When a transform changes the character count
/// (stripped accents, multi-char lowercase) the candidate is printed plain.
pub fn highlight(query: &str, candidate: &str, variant: Variant) -> String {
    if !use_colors() {
        return candidate.to_string();
    }

    let transformed_query = variant.apply(query);
    let transformed = variant.apply(candidate);
    if transformed.chars().count() != candidate.chars().count() {
        return candidate.to_string();
    }

    let Some(indices) = match_indices(&transformed_query, &transformed) else {
        return candidate.to_string();
    };

    let mark = format!("{}{}", BOLD, rgb(palette().near));
    let mut out = String::with_capacity(candidate.len() + indices.len() * 16);
    let mut next = indices.iter().peekable();

    for (position, c) in candidate.chars().enumerate() {
        if next.peek() == Some(&&position) {
            next.next();
            out.push_str(&mark);
            out.push(c);
            out.push_str(RESET);
        } else {
            out.push(c);
        }
    }
    out
}

/// Color a distance by how close it is: green for near, yellow, then red.
pub fn distance_badge(distance: usize) -> String {
    paint(palette().for_distance(distance), &format!("{:>4}", distance))
}

/// Dim secondary text such as original indexes.
pub fn dim(text: &str) -> String {
    paint(palette().dim, text)
}
