//! Fold and normalize variants of the matcher and ranker.

use super::common::{ALL_VARIANTS, MATCH_VECTORS};
use sift::{matches, rank, Variant};

#[test]
fn test_fold_matches_uppercased_vectors() {
    for &(query, candidate, wanted, _) in MATCH_VECTORS {
        let upper = candidate.to_uppercase();
        assert_eq!(
            matches(query, &upper, Variant::FOLD),
            wanted,
            "{:?} in {:?}",
            query,
            upper
        );
    }
}

#[test]
fn test_fold_ranks_uppercased_vectors() {
    for &(query, candidate, _, wanted) in MATCH_VECTORS {
        let upper = candidate.to_uppercase();
        assert_eq!(
            rank(query, &upper, Variant::FOLD),
            wanted,
            "rank of {:?} in {:?}",
            query,
            upper
        );
    }
}

#[test]
fn test_plain_variant_agrees_with_plain_functions() {
    for &(query, candidate, wanted, rank_wanted) in MATCH_VECTORS {
        assert_eq!(matches(query, candidate, Variant::PLAIN), wanted);
        assert_eq!(rank(query, candidate, Variant::PLAIN), rank_wanted);
    }
}

#[test]
fn test_normalized_vectors() {
    let cases = [
        ("limon", "limón", true),
        ("limón", "limon tart", true),
        ("limón", "LiMóN tArT", false),
        ("limón", "LeMoN tArT", false),
    ];
    for (query, candidate, wanted) in cases {
        assert_eq!(
            matches(query, candidate, Variant::NORMALIZED),
            wanted,
            "{:?} in {:?}",
            query,
            candidate
        );
    }
}

#[test]
fn test_normalized_fold_vectors() {
    let cases = [
        ("limon", "limón", true),
        ("limón", "limon tart", true),
        ("limón", "LiMóN tArT", true),
        ("limón", "LeMoN tArT", false),
    ];
    for (query, candidate, wanted) in cases {
        assert_eq!(
            matches(query, candidate, Variant::NORMALIZED_FOLD),
            wanted,
            "{:?} in {:?}",
            query,
            candidate
        );
    }
}

#[test]
fn test_rank_normalized_vectors() {
    assert_eq!(rank("limó", "limon", Variant::NORMALIZED), Some(1));
    assert_eq!(rank("limó", "LIMON", Variant::NORMALIZED), None);
}

#[test]
fn test_rank_normalized_fold_vectors() {
    assert_eq!(rank("limó", "limon", Variant::NORMALIZED_FOLD), Some(1));
    assert_eq!(rank("limó", "LIMON", Variant::NORMALIZED_FOLD), Some(1));
    assert_eq!(rank("limó", "LIMON TART", Variant::NORMALIZED_FOLD), Some(6));
}

#[test]
fn test_empty_query_matches_under_every_variant() {
    for variant in ALL_VARIANTS {
        assert!(matches("", "", variant));
        assert!(matches("", "LiMóN", variant));
    }
}

#[test]
fn test_composed_query_decomposed_candidate() {
    let composed = "whél";
    let decomposed = "cartwhe\u{301}e\u{301}l";

    assert!(!matches(composed, decomposed, Variant::PLAIN));
    assert!(!matches(composed, decomposed, Variant::FOLD));
    assert!(matches(composed, decomposed, Variant::NORMALIZED));
    assert!(matches(composed, decomposed, Variant::NORMALIZED_FOLD));
}

#[test]
fn test_width_changing_fold_is_not_rejected_early() {
    // Ⱦ (2 bytes) lowercases to ⱦ (3 bytes); lengths must be compared after
    // transforming, in code points
    assert!(matches("ⱦ", "Ⱦ", Variant::FOLD));
    assert_eq!(rank("ⱦ", "Ⱦ", Variant::FOLD), Some(0));
    assert!(matches("ⱦⱦ", "xȾȾ", Variant::FOLD));
}
