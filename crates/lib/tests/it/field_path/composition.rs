//! Tests for appending strings and paths to a FieldPath.

use fieldpath::FieldPath;

use crate::helpers::*;

#[test]
fn test_join_paths() {
    let path = FieldPath::new(["a"]).join(&FieldPath::new(["b", "c"]));
    assert_eq!(path.to_api_repr(), "a.b.c");
}

#[test]
fn test_append_string() {
    let base = valid_path("user");
    let path = base.append("profile.`display name`");
    assert_eq!(components(&path), vec!["user", "profile", "display name"]);
}

#[test]
fn test_append_is_non_mutating() {
    let base = valid_path("a.b");
    let _ = base.append("c");
    let _ = base.join(&valid_path("d"));
    assert_eq!(base, valid_path("a.b"));
}

#[test]
fn test_append_to_empty_path() {
    let path = FieldPath::default().append("a.b");
    assert_eq!(path, valid_path("a.b"));
    assert_eq!(valid_path("a").join(&FieldPath::default()), valid_path("a"));
}

#[test]
fn test_invalid_propagates_through_composition() {
    assert!(!FieldPath::invalid().append("a").is_valid());
    assert!(!FieldPath::invalid().join(&FieldPath::new(["a"])).is_valid());
    assert!(!FieldPath::new(["a\x00bad/"]).append("b").is_valid());
    assert!(!valid_path("a").append("b..c").is_valid());
    assert!(!valid_path("a").append("").is_valid());
    assert!(!valid_path("a").join(&FieldPath::new(["*"])).is_valid());

    // Chains never recover
    let chained = FieldPath::invalid().append("a").append("b").join(&valid_path("c"));
    assert!(!chained.is_valid());
}

#[test]
fn test_join_matches_append_of_rendered_path() {
    let base = valid_path("root");
    for suffix in sample_paths().into_iter().filter(|p| p.is_valid() && !p.is_empty()) {
        assert_eq!(
            base.join(&suffix),
            base.append(&suffix.to_api_repr()),
            "suffix {suffix}"
        );
    }
}

#[test]
fn test_navigation_helpers() {
    let path = valid_path("a.`b.c`.d");
    assert_eq!(path.last(), Some("d"));
    assert_eq!(path.parent(), Some(valid_path("a.`b.c`")));
    assert!(path.starts_with(&valid_path("a.`b.c`")));
    assert!(!path.starts_with(&valid_path("a.b")));
    assert!(!FieldPath::invalid().starts_with(&FieldPath::default()));
}
