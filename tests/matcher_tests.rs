//! Integration tests for segment-router
//!
//! Tests are organized by feature area and cover:
//! - Segment-count gate
//! - Literal matching (exact, case-sensitive)
//! - Placeholder captures (raw, undecoded)
//! - Regex captures (decoded, case-insensitive)
//! - Duplicate parameter names (later position wins)
//! - Short-circuit evaluation
//! - Cache idempotence and concurrent convergence
//! - Compile-time rejection of malformed patterns

use segment_router::*;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Segment-count gate
// ============================================================================

#[test]
fn test_too_few_segments_do_not_match() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher.match_route(&["users"], "users/{id}").unwrap();
    assert!(!result.is_match());
    assert!(result.params().is_empty());
}

#[test]
fn test_too_many_segments_do_not_match() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher
        .match_route(&["users", "42", "extra"], "users/{id}")
        .unwrap();
    assert!(!result.is_match());
    assert!(result.params().is_empty());
}

#[test]
fn test_empty_pattern_matches_only_empty_path() {
    let matcher = RoutePatternMatcher::new();
    assert!(matcher.match_route(&[], "/").unwrap().is_match());
    assert!(!matcher.match_route(&["a"], "/").unwrap().is_match());
}

// ============================================================================
// Literal matching
// ============================================================================

#[test]
fn test_literal_exact_match() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher.match_route(&["a", "b"], "a/b").unwrap();
    assert!(result.is_match());
    assert!(result.params().is_empty());
}

#[test]
fn test_literal_match_is_case_sensitive() {
    let matcher = RoutePatternMatcher::new();
    assert!(!matcher.match_route(&["a", "B"], "a/b").unwrap().is_match());
}

#[test]
fn test_literal_mismatch() {
    let matcher = RoutePatternMatcher::new();
    assert!(!matcher
        .match_route(&["a", "c"], "a/b")
        .unwrap()
        .is_match());
}

// ============================================================================
// Placeholder captures
// ============================================================================

#[test]
fn test_placeholder_capture() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher.match_route(&["users", "42"], "users/{id}").unwrap();
    assert!(result.is_match());
    assert_eq!(result.param("id"), Some("42"));
}

#[test]
fn test_placeholder_value_is_not_decoded() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher
        .match_route(&["users", "4%205"], "users/{id}")
        .unwrap();
    assert!(result.is_match());
    // Raw value, NOT percent-decoded — observed contract.
    assert_eq!(result.param("id"), Some("4%205"));
}

#[test]
fn test_multiple_placeholders() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher
        .match_route(&["users", "42", "posts", "7"], "users/{uid}/posts/{pid}")
        .unwrap();
    assert!(result.is_match());
    assert_eq!(result.param("uid"), Some("42"));
    assert_eq!(result.param("pid"), Some("7"));
}

// ============================================================================
// Regex captures
// ============================================================================

#[test]
fn test_regex_capture() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher
        .match_route(&["posts", "2019"], "posts/(?<year>[0-9]{4})")
        .unwrap();
    assert!(result.is_match());
    assert_eq!(result.param("year"), Some("2019"));
}

#[test]
fn test_regex_capture_is_decoded() {
    let matcher = RoutePatternMatcher::new();
    // "%32%30%31%39" percent-decodes to "2019".
    let result = matcher
        .match_route(&["posts", "%32%30%31%39"], "posts/(?<year>[0-9]{4})")
        .unwrap();
    assert!(result.is_match());
    assert_eq!(result.param("year"), Some("2019"));
}

#[test]
fn test_regex_non_match_is_negative_verdict() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher
        .match_route(&["posts", "not-a-year"], "posts/(?<year>[0-9]{4})")
        .unwrap();
    assert!(!result.is_match());
    assert!(result.params().is_empty());
}

#[test]
fn test_regex_is_case_insensitive() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher
        .match_route(&["files", "README"], "files/(?<name>[a-z]+)")
        .unwrap();
    assert!(result.is_match());
    assert_eq!(result.param("name"), Some("README"));
}

#[test]
fn test_regex_applies_per_segment_not_across_path() {
    let matcher = RoutePatternMatcher::new();
    // The year regex sees only its own segment; "posts" must still match
    // the literal even though the regex could find digits elsewhere.
    let result = matcher
        .match_route(&["2019", "posts"], "posts/(?<year>[0-9]{4})")
        .unwrap();
    assert!(!result.is_match());
}

// ============================================================================
// Duplicate parameter names
// ============================================================================

#[test]
fn test_duplicate_placeholder_later_segment_wins() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher
        .match_route(&["first", "second"], "{x}/{x}")
        .unwrap();
    assert!(result.is_match());
    assert_eq!(result.param("x"), Some("second"));
    assert_eq!(result.params().len(), 1);
}

#[test]
fn test_duplicate_name_regex_after_placeholder_wins() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher
        .match_route(&["first", "second"], "{x}/(?<x>.+)")
        .unwrap();
    assert!(result.is_match());
    assert_eq!(result.param("x"), Some("second"));
}

// ============================================================================
// Short-circuit evaluation
// ============================================================================

#[test]
fn test_failure_before_capture_discards_captures() {
    let matcher = RoutePatternMatcher::new();
    // Position 0 fails, so the placeholder at position 1 never binds.
    let result = matcher
        .match_route(&["wrong", "42"], "users/{id}")
        .unwrap();
    assert!(!result.is_match());
    assert!(result.params().is_empty());
}

#[test]
fn test_failure_after_capture_discards_captures() {
    let matcher = RoutePatternMatcher::new();
    // Position 0 captures, position 1 fails; the partial capture is gone.
    let result = matcher
        .match_route(&["42", "comments"], "{id}/posts")
        .unwrap();
    assert!(!result.is_match());
    assert!(result.params().is_empty());
}

// ============================================================================
// Cache behavior
// ============================================================================

#[test]
fn test_repeated_matches_reuse_the_cached_pattern() {
    let matcher = RoutePatternMatcher::new();

    let first = matcher.match_route(&["users", "1"], "users/{id}").unwrap();
    let second = matcher.match_route(&["users", "2"], "users/{id}").unwrap();

    assert_eq!(first.param("id"), Some("1"));
    assert_eq!(second.param("id"), Some("2"));
    assert_eq!(matcher.compiled_count(), 1);
}

#[test]
fn test_cache_returns_single_instance_per_key() {
    let cache = MatcherCache::new();
    let first = cache.get_or_compile("users/{id}").unwrap();
    let second = cache.get_or_compile("users/{id}").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_concurrent_dispatch_converges_on_one_compiled_pattern() {
    let matcher = Arc::new(RoutePatternMatcher::new());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let matcher = Arc::clone(&matcher);
            std::thread::spawn(move || {
                let segment = i.to_string();
                let result = matcher
                    .match_route(&["users", &segment], "users/{id}")
                    .unwrap();
                assert!(result.is_match());
                assert_eq!(result.param("id"), Some(segment.as_str()));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(matcher.compiled_count(), 1);
}

// ============================================================================
// Compile-time rejection
// ============================================================================

#[test]
fn test_malformed_regex_pattern_is_rejected() {
    let matcher = RoutePatternMatcher::new();
    let err = matcher
        .match_route(&["posts", "2019"], "posts/(?<bad")
        .unwrap_err();
    assert!(matches!(err, PatternError::InvalidRegex { .. }));
}

#[test]
fn test_malformed_pattern_does_not_poison_other_routes() {
    let matcher = RoutePatternMatcher::new();

    matcher.precompile("users/{id}").unwrap();
    assert!(matcher.precompile("posts/(?<bad").is_err());

    // The bad pattern keeps erroring; the good one keeps matching.
    assert!(matcher
        .match_route(&["posts", "x"], "posts/(?<bad")
        .is_err());
    let result = matcher.match_route(&["users", "9"], "users/{id}").unwrap();
    assert!(result.is_match());
    assert_eq!(matcher.compiled_count(), 1);
}

// ============================================================================
// Raw-path convenience and verdict surface
// ============================================================================

#[test]
fn test_match_path_splits_and_normalizes() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher.match_path("//users/42/", "users/{id}").unwrap();
    assert!(result.is_match());
    assert_eq!(result.param("id"), Some("42"));
}

#[test]
fn test_into_params() {
    let matcher = RoutePatternMatcher::new();
    let params: HashMap<String, String> = matcher
        .match_route(&["users", "42"], "users/{id}")
        .unwrap()
        .into_params();
    assert_eq!(params.get("id"), Some(&"42".to_string()));
}

#[test]
fn test_mixed_pattern_end_to_end() {
    let matcher = RoutePatternMatcher::new();
    let result = matcher
        .match_route(
            &["users", "jane%20doe", "posts", "2019"],
            "users/{name}/posts/(?<year>[0-9]{4})",
        )
        .unwrap();
    assert!(result.is_match());
    // Placeholder raw, regex decoded.
    assert_eq!(result.param("name"), Some("jane%20doe"));
    assert_eq!(result.param("year"), Some("2019"));
}
