//! JSON value representation.
//!
//! This module provides the core data structure for representing JSON
//! documents in jsonpick. A document is a tree of [`JsonValue`] nodes in
//! which every container exclusively owns its children, so dropping the root
//! releases the entire tree in one recursive pass.
//!
//! # Example
//!
//! ```
//! use jsonpick::document::node::JsonValue;
//!
//! let value = JsonValue::Object(vec![
//!     ("name".to_string(), JsonValue::String("Alice".to_string())),
//!     ("age".to_string(), JsonValue::Number(30.0)),
//! ]);
//!
//! assert!(value.is_object());
//! assert!(value.get("age").is_some());
//! ```

/// A single JSON value.
///
/// Objects are stored as a vector of `(key, value)` pairs rather than a map:
/// insertion order reflects source text order, keys are unique by
/// construction of well-formed input, and lookup is a linear scan by key
/// equality. Numbers are stored as `f64` and are always finite; the parser
/// rejects anything that would produce NaN or an infinity.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// A JSON object containing ordered key-value pairs
    Object(Vec<(String, JsonValue)>),
    /// A JSON array containing ordered values
    Array(Vec<JsonValue>),
    /// A JSON string
    String(String),
    /// A JSON number (always finite)
    Number(f64),
    /// A JSON boolean
    Boolean(bool),
    /// A JSON null value
    Null,
}

impl JsonValue {
    /// Returns true if this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this value is a container (object or array).
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Object(_) | JsonValue::Array(_))
    }

    /// Returns the string contents if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value if this value is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value if this value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Looks up a key in an object by linear scan.
    ///
    /// Returns `None` if this value is not an object or the key is absent.
    /// The first matching pair wins, matching source order.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpick::document::node::JsonValue;
    ///
    /// let obj = JsonValue::Object(vec![
    ///     ("active".to_string(), JsonValue::Boolean(true)),
    /// ]);
    /// assert_eq!(obj.get("active"), Some(&JsonValue::Boolean(true)));
    /// assert_eq!(obj.get("missing"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Returns the element at `index` if this value is an array.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    /// Returns the number of children for containers, 0 for leaves.
    pub fn len(&self) -> usize {
        match self {
            JsonValue::Object(pairs) => pairs.len(),
            JsonValue::Array(elements) => elements.len(),
            _ => 0,
        }
    }

    /// Returns true if this value has no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
