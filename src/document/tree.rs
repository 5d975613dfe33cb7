//! Parsed document wrapper.
//!
//! [`JsonTree`] owns the root [`JsonValue`] of a parsed document together
//! with the source text it came from. A tree is produced wholly by one
//! parse call and read-only afterwards; queries borrow into it and never
//! outlive it.

use super::node::JsonValue;

/// A complete parsed JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonTree {
    root: JsonValue,
    /// The original JSON text, kept for diagnostics and tooling.
    original_source: Option<String>,
}

impl JsonTree {
    /// Creates a tree with the given root and no source text.
    pub fn new(root: JsonValue) -> Self {
        Self {
            root,
            original_source: None,
        }
    }

    /// Creates a tree with the given root and original source text.
    pub fn with_source(root: JsonValue, original_source: Option<String>) -> Self {
        Self {
            root,
            original_source,
        }
    }

    /// Returns a reference to the root value.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpick::document::node::JsonValue;
    /// use jsonpick::document::tree::JsonTree;
    ///
    /// let tree = JsonTree::new(JsonValue::Boolean(true));
    /// assert_eq!(tree.root().as_bool(), Some(true));
    /// ```
    pub fn root(&self) -> &JsonValue {
        &self.root
    }

    /// Returns the original JSON source, if available.
    pub fn original_source(&self) -> Option<&str> {
        self.original_source.as_deref()
    }

    /// Consumes the tree and returns the root value.
    pub fn into_root(self) -> JsonValue {
        self.root
    }
}
