//! Path resolution against a parsed document.

use super::ast::PathSegment;
use super::parser::Parser;
use crate::document::node::JsonValue;

/// Resolves path segments against a document tree.
pub struct Resolver<'a> {
    root: &'a JsonValue,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over the given root value.
    pub fn new(root: &'a JsonValue) -> Self {
        Resolver { root }
    }

    /// Walks the segments left to right and returns the matching value.
    ///
    /// A `Key` step requires the current value to be an object and scans its
    /// pairs for an exact match; an `Index` step requires an array and an
    /// in-range index. The first violated expectation short-circuits with
    /// `None`; later segments are never examined.
    pub fn resolve(&self, segments: &[PathSegment]) -> Option<&'a JsonValue> {
        let mut current = self.root;

        for segment in segments {
            current = match segment {
                PathSegment::Key(name) => current.get(name)?,
                PathSegment::Index(index) => current.get_index(*index)?,
            };
        }

        Some(current)
    }
}

/// Resolves a path expression string against a root value.
///
/// Returns `None` when the root is not an object, the path fails to
/// tokenize, or any segment does not resolve. The returned reference points
/// into the existing tree; nothing is copied.
///
/// # Example
///
/// ```
/// use jsonpick::document::parser::parse_json;
/// use jsonpick::query::resolve;
///
/// let tree = parse_json(r#"{"details": {"age": 30}}"#).unwrap();
/// assert_eq!(resolve(tree.root(), "details.age").and_then(|v| v.as_f64()), Some(30.0));
/// assert!(resolve(tree.root(), "details.height").is_none());
/// ```
pub fn resolve<'a>(root: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    if !root.is_object() {
        return None;
    }

    let parsed = Parser::parse(path).ok()?;
    Resolver::new(root).resolve(&parsed.segments)
}
