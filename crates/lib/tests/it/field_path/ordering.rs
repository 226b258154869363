//! Tests for FieldPath equality and the total order over paths.

use std::collections::{BTreeMap, HashMap};

use fieldpath::FieldPath;

use crate::helpers::*;

#[test]
fn test_lexicographic_order() {
    assert!(valid_path("a") < valid_path("a.b"));
    assert!(valid_path("a.b") < valid_path("a.c"));
    assert!(valid_path("a.z") < valid_path("b"));
    assert!(valid_path("B") < valid_path("a"));
    assert!(valid_path("a.b") <= valid_path("a.b"));
    assert!(valid_path("b") >= valid_path("a.b.c"));
    assert!(valid_path("b") > valid_path("a"));
}

#[test]
fn test_invalid_sorts_first() {
    for path in sample_paths().into_iter().filter(FieldPath::is_valid) {
        assert!(FieldPath::invalid() < path, "invalid should sort before {path}");
    }
}

#[test]
fn test_exactly_one_relation_holds() {
    let paths = sample_paths();
    for p in &paths {
        for q in &paths {
            let relations = [p < q, p == q, p > q];
            assert_eq!(
                relations.iter().filter(|r| **r).count(),
                1,
                "{p:?} vs {q:?}"
            );
        }
    }
}

#[test]
fn test_transitivity() {
    let paths = sample_paths();
    for p in &paths {
        for q in &paths {
            for r in &paths {
                if p < q && q < r {
                    assert!(p < r, "{p:?} < {q:?} < {r:?}");
                }
            }
        }
    }
}

#[test]
fn test_sort_is_deterministic() {
    let mut forward = sample_paths();
    let mut reversed = sample_paths();
    reversed.reverse();

    forward.sort();
    reversed.sort();
    assert_eq!(forward, reversed);
    assert!(!forward[0].is_valid());
    assert_eq!(forward[3], FieldPath::default());
}

#[test]
fn test_paths_as_map_keys() {
    let mut ordered = BTreeMap::new();
    let mut hashed = HashMap::new();
    for (i, path) in sample_paths().into_iter().enumerate() {
        ordered.insert(path.clone(), i);
        hashed.insert(path, i);
    }

    // The three invalid samples collapse into one key
    assert_eq!(ordered.len(), sample_paths().len() - 2);
    assert_eq!(hashed.len(), ordered.len());
    assert_eq!(ordered.get(&FieldPath::invalid()), Some(&3));
    assert_eq!(ordered.keys().next().map(FieldPath::is_valid), Some(false));
}
