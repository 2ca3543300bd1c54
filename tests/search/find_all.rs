//! `find_all` over the fixture candidate lists.

use super::common::{
    assert_ordered_subsequence, ACCENTED_WHEEL_CANDIDATES, ALL_VARIANTS, WHEEL_CANDIDATES,
};
use sift::{find_all, matches, Displayed, Variant};

#[test]
fn test_find_whel() {
    let hits = find_all("whel", WHEEL_CANDIDATES, Variant::PLAIN);
    assert_eq!(hits, [&"cartwheel", &"wheel"]);
}

#[test]
fn test_find_by_variant() {
    let cases: [(Variant, &[&str]); 4] = [
        (Variant::PLAIN, &["cartwhéél"]),
        (Variant::FOLD, &["cartwhéél"]),
        (Variant::NORMALIZED, &["cartwheel", "wheel", "cartwhéél"]),
        (
            Variant::NORMALIZED_FOLD,
            &["cartwheel", "wheel", "cartwhéél", "WHEEL"],
        ),
    ];

    for (variant, wanted) in cases {
        let hits: Vec<&str> = find_all("whél", ACCENTED_WHEEL_CANDIDATES, variant)
            .into_iter()
            .copied()
            .collect();
        assert_eq!(hits, wanted, "variant {}", variant);
    }
}

#[test]
fn test_find_agrees_with_matches() {
    for variant in ALL_VARIANTS {
        for query in ["whl", "whél", "WHE", "", "zzz"] {
            let hits: Vec<&str> = find_all(query, ACCENTED_WHEEL_CANDIDATES, variant)
                .into_iter()
                .copied()
                .collect();
            let expected: Vec<&str> = ACCENTED_WHEEL_CANDIDATES
                .iter()
                .copied()
                .filter(|c| matches(query, c, variant))
                .collect();

            assert_eq!(hits, expected, "{:?} under {}", query, variant);
            assert_ordered_subsequence(&hits, ACCENTED_WHEEL_CANDIDATES);
        }
    }
}

#[test]
fn test_find_returns_references_into_input() {
    let candidates = vec![String::from("wheel"), String::from("wheel")];
    let hits = find_all("whl", &candidates, Variant::PLAIN);

    assert_eq!(hits.len(), 2);
    assert!(std::ptr::eq(hits[0], &candidates[0]));
    assert!(std::ptr::eq(hits[1], &candidates[1]));
}

#[test]
fn test_find_over_displayed_values() {
    let candidates: Vec<Displayed<u32>> = (95..=105).map(Displayed).collect();
    let hits = find_all("10", &candidates, Variant::PLAIN);
    let values: Vec<u32> = hits.iter().map(|d| d.0).collect();
    assert_eq!(values, vec![100, 101, 102, 103, 104, 105]);
}

#[test]
fn test_find_empty_list() {
    let none: Vec<String> = Vec::new();
    for variant in ALL_VARIANTS {
        assert!(find_all("whl", &none, variant).is_empty());
    }
}
