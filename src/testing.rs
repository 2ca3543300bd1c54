//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical fixtures so the same vectors are not retyped in
//! every test file.

#![doc(hidden)]

use crate::scoring::Rank;

/// A long ASCII passage for "big early" / "big late" matching.
pub const DE_BELLO_GALLICO: &str = include_str!("../tests/fixtures/de_bello_gallico.txt");

/// Candidates for the `whl` / `whel` ranking vectors.
pub const WHEEL_CANDIDATES: &[&str] = &["cartwheel", "foobar", "wheel", "baz"];

/// Candidates mixing accents and case for the normalized vectors.
pub const ACCENTED_WHEEL_CANDIDATES: &[&str] =
    &["cartwheel", "foobar", "wheel", "baz", "cartwhéél", "WHEEL"];

/// Candidates for the `limó` ranking vectors.
pub const LIMON_CANDIDATES: &[&str] = &["limón", "limon", "lemon", "LIMON"];

/// `(query, candidate, matches, scan rank)` for the plain variant.
///
/// The fold variant must give the same answers when the candidate is
/// upper-cased.
pub const MATCH_VECTORS: &[(&str, &str, bool, Option<usize>)] = &[
    ("twl", "cartwheel", true, Some(6)),
    ("cart", "cartwheel", true, Some(5)),
    ("cw", "cartwheel", true, Some(7)),
    ("ee", "cartwheel", true, Some(7)),
    ("art", "cartwheel", true, Some(6)),
    ("eeel", "cartwheel", false, None),
    ("dog", "cartwheel", false, None),
    ("ёлка", "ёлочка", true, Some(2)),
    ("ветер", "ёлочка", false, None),
    ("中国", "中华人民共和国", true, Some(5)),
    ("日本", "中华人民共和国", false, None),
    ("イ", "イカ", true, Some(1)),
    ("limón", "limon", false, None),
    ("kitten", "setting", false, None),
    ("Ⱦ", "", false, None),
];

/// `(a, b, distance)` Levenshtein vectors.
pub const DISTANCE_VECTORS: &[(&str, &str, usize)] = &[
    ("a", "a", 0),
    ("ab", "ab", 0),
    ("ab", "aa", 1),
    ("ab", "aaa", 2),
    ("bbb", "a", 3),
    ("kitten", "sitting", 3),
    ("ёлка", "ёлочка", 2),
    ("ветер", "ёлочка", 6),
    ("中国", "中华人民共和国", 5),
    ("日本", "中华人民共和国", 7),
];

/// Flatten ranks over string candidates to `(candidate, distance, original_index)`.
pub fn rank_tuples<'a>(ranks: &[Rank<'a, &'a str>]) -> Vec<(&'a str, usize, usize)> {
    ranks
        .iter()
        .map(|r| (*r.candidate, r.distance, r.original_index))
        .collect()
}
