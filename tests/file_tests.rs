//! Integration tests for file loading.

use std::fs;
use std::io::Write;

use jsonpick::document::node::JsonValue;
use jsonpick::file::loader::load_json_file;
use jsonpick::query::resolve;
use tempfile::NamedTempFile;

#[test]
fn test_load_and_query_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(
        temp_file,
        r#"{{"details": {{"name": "Alice", "age": 30}}, "numbers": [1, 2, 3, 4]}}"#
    )
    .unwrap();

    let tree = load_json_file(temp_file.path()).unwrap();

    assert_eq!(
        resolve(tree.root(), "details.name").and_then(JsonValue::as_str),
        Some("Alice")
    );
    assert_eq!(
        resolve(tree.root(), "numbers[3]").and_then(JsonValue::as_f64),
        Some(4.0)
    );
}

#[test]
fn test_load_gzipped_file() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let json_content = r#"{"active": true}"#;
    let temp_file = NamedTempFile::new().unwrap();
    let gz_path = temp_file.path().with_extension("json.gz");

    let file = fs::File::create(&gz_path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(json_content.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let tree = load_json_file(&gz_path).unwrap();
    assert_eq!(
        resolve(tree.root(), "active").and_then(JsonValue::as_bool),
        Some(true)
    );
}

#[test]
fn test_load_missing_file_reports_context() {
    let result = load_json_file("/nonexistent/path/data.json");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_load_malformed_file_reports_parse_failure() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, r#"{{"a": "#).unwrap();

    let err = load_json_file(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse JSON"));
}
