//! Tests for the canonical API representation and its round trips.

use fieldpath::FieldPath;

use crate::helpers::*;

#[test]
fn test_simple_components_render_bare() {
    assert_eq!(FieldPath::new(["a", "b"]).to_api_repr(), "a.b");
    assert_eq!(FieldPath::new(["_x", "y9"]).to_api_repr(), "_x.y9");
}

#[test]
fn test_non_identifiers_render_quoted() {
    let path = FieldPath::new(["1st", "has space", "", "`dotted.name`"]);
    assert_eq!(path.to_api_repr(), "`1st`.`has space`.``.`dotted.name`");

    let escapes = FieldPath::parse(r"`a\\b`.`c\`d`");
    assert_eq!(escapes.to_api_repr(), r"`a\\b`.`c\`d`");
}

#[test]
fn test_invalid_renders_empty() {
    assert_eq!(FieldPath::invalid().to_api_repr(), "");
    assert_eq!(FieldPath::new(["a*"]).to_api_repr(), "");
    assert_eq!(FieldPath::invalid().to_string(), "(invalid field path)");
}

#[test]
fn test_simple_identifier_round_trip() {
    let parts = ["user", "profile", "_meta", "v2"];
    let path = FieldPath::new(parts);
    let reparsed = FieldPath::parse(&path.to_api_repr());
    assert_eq!(components(&reparsed), parts);
}

#[test]
fn test_render_parse_round_trip() {
    for path in sample_paths()
        .into_iter()
        .filter(|p| p.is_valid() && !p.is_empty())
    {
        let repr = path.to_api_repr();
        assert_eq!(FieldPath::parse(&repr), path, "round trip through '{repr}'");
    }
}

#[test]
fn test_parse_render_idempotent() {
    for input in ["a.b", "a.`b.c`", "user.1st.has space", r"`x\`y`", "``.z"] {
        let once = FieldPath::parse(input);
        let twice = FieldPath::parse(&once.to_api_repr());
        assert_eq!(once, twice, "input '{input}'");
        assert_eq!(once.to_api_repr(), twice.to_api_repr());
    }
}

#[test]
fn test_serde_uses_api_repr() {
    let path = valid_path("a.`b c`");
    let json = serde_json::to_value(&path).unwrap();
    assert_eq!(json, serde_json::json!("a.`b c`"));
    assert_eq!(serde_json::from_value::<FieldPath>(json).unwrap(), path);
}
