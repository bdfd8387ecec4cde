use streamer_sheet::name_match::{DEFAULT_THRESHOLD, best_match, similarity};

#[test]
fn exact_equality_scores_100() {
    let refs = ["Paul Skenes", "Zack Wheeler", "Tarik Skubal"];
    let outcome = best_match("Zack Wheeler", &refs, DEFAULT_THRESHOLD);
    assert!(outcome.matched);
    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.matched_name.as_deref(), Some("Zack Wheeler"));
}

#[test]
fn exact_equality_wins_even_at_threshold_100() {
    // Exact match short-circuits before any fuzzy scoring.
    let refs = ["Zack Wheeler"];
    let outcome = best_match("Zack Wheeler", &refs, 100);
    assert!(outcome.matched);
    assert_eq!(outcome.score, 100);
}

#[test]
fn accent_difference_clears_default_threshold() {
    let refs = ["Framber Valdéz", "Paul Skenes"];
    let outcome = best_match("Framber Valdez", &refs, DEFAULT_THRESHOLD);
    assert!(outcome.matched);
    assert!((85..100).contains(&outcome.score), "score {}", outcome.score);
    assert_eq!(outcome.matched_name.as_deref(), Some("Framber Valdéz"));
}

#[test]
fn dissimilar_candidate_is_unmatched() {
    let refs = ["Zack Wheeler", "Tarik Skubal", "Paul Skenes"];
    let outcome = best_match("Jake Irish", &refs, DEFAULT_THRESHOLD);
    assert!(!outcome.matched);
    assert!(outcome.matched_name.is_none());
    assert!(outcome.score < DEFAULT_THRESHOLD);
}

#[test]
fn empty_reference_list_is_unmatched_not_an_error() {
    let refs: [&str; 0] = [];
    let outcome = best_match("Zack Wheeler", &refs, DEFAULT_THRESHOLD);
    assert!(!outcome.matched);
    assert!(outcome.matched_name.is_none());
    assert_eq!(outcome.score, 0);
}

#[test]
fn similarity_is_symmetric_and_bounded() {
    let pairs = [
        ("Zack Wheeler", "Zach Wheeler"),
        ("Framber Valdez", "Framber Valdéz"),
        ("Jake Irish", "Tarik Skubal"),
        ("", "anything"),
    ];
    for (a, b) in pairs {
        let ab = similarity(a, b);
        let ba = similarity(b, a);
        assert_eq!(ab, ba, "similarity not symmetric for {a:?}/{b:?}");
        assert!(ab <= 100);
    }
    assert_eq!(similarity("same", "same"), 100);
}

#[test]
fn ties_break_toward_first_reference() {
    // Both references are one substitution away; the earlier one wins.
    let refs = ["aac", "aad"];
    let outcome = best_match("aab", &refs, 60);
    assert!(outcome.matched);
    assert_eq!(outcome.matched_name.as_deref(), Some("aac"));

    let reversed = ["aad", "aac"];
    let outcome = best_match("aab", &reversed, 60);
    assert_eq!(outcome.matched_name.as_deref(), Some("aad"));
}

#[test]
fn threshold_is_a_parameter_not_a_constant() {
    let refs = ["Framber Valdéz"];
    let strict = best_match("Framber Valdez", &refs, 95);
    assert!(!strict.matched);
    let lenient = best_match("Framber Valdez", &refs, 85);
    assert!(lenient.matched);
}
