//! Integration tests for path resolution over parsed documents.

use jsonpick::document::parser::parse_json;
use jsonpick::document::node::JsonValue;
use jsonpick::query::resolve;
use jsonpick::render;

fn sample_root() -> JsonValue {
    parse_json(r#"{"details":{"age":30},"numbers":[1,2,3,4]}"#)
        .unwrap()
        .into_root()
}

#[test]
fn test_resolve_nested_field() {
    let root = sample_root();
    let age = resolve(&root, "details.age").unwrap();
    assert_eq!(age.as_f64(), Some(30.0));
}

#[test]
fn test_resolve_indexed_field() {
    let root = sample_root();
    let fourth = resolve(&root, "numbers[3]").unwrap();
    assert_eq!(fourth.as_f64(), Some(4.0));
}

#[test]
fn test_resolve_out_of_range() {
    let root = sample_root();
    assert!(resolve(&root, "numbers[9]").is_none());
}

#[test]
fn test_resolve_missing_key_chain() {
    let root = sample_root();
    assert!(resolve(&root, "missing.key").is_none());
}

#[test]
fn test_resolve_chained_indices_into_matrix() {
    let tree = parse_json(r#"{"matrix":[[1,2],[3,4]]}"#).unwrap();
    let cell = resolve(tree.root(), "matrix[1][0]").unwrap();
    assert_eq!(cell.as_f64(), Some(3.0));
}

#[test]
fn test_resolution_short_circuits_on_first_violation() {
    let root = sample_root();
    // "numbers[9]" already fails; the trailing segments are never reached
    // and cannot rescue the lookup.
    assert!(resolve(&root, "numbers[9].anything[0]").is_none());
}

#[test]
fn test_resolved_reference_lives_as_long_as_root() {
    let root = sample_root();
    let age = resolve(&root, "details.age").unwrap();
    // Still usable after other lookups; nothing was copied or invalidated.
    let _ = resolve(&root, "numbers[0]");
    assert_eq!(age.as_f64(), Some(30.0));
}

/// End-to-end: parse, resolve, render with the fixed output contract.
#[test]
fn test_lookup_rendering_contract() {
    let tree = parse_json(
        r#"{
            "details": {"name": "Alice", "age": 30},
            "numbers": [1, 2, 3, 4],
            "active": true,
            "nickname": null
        }"#,
    )
    .unwrap();
    let root = tree.root();

    let cases = [
        ("details.name", "String: Alice"),
        ("details.age", "Number: 30.00"),
        ("active", "Boolean: true"),
        ("nickname", "Null"),
        ("numbers", "Array:"),
        ("details", "Object {...}"),
        ("numbers[3]", "Number: 4.00"),
        ("numbers[9]", "Json value not found."),
        ("missing.key", "Json value not found."),
    ];

    for (path, expected) in cases {
        let rendered = render::describe_lookup(resolve(root, path), render::DEFAULT_PRECISION);
        assert_eq!(rendered, expected, "path: {}", path);
    }
}
