//! jsonpick - parse JSON into a value tree and query it with path expressions.
//!
//! The crate has two halves:
//!
//! - [`document`] parses JSON text into an owned [`document::node::JsonValue`]
//!   tree with a hand-written recursive descent parser.
//! - [`query`] resolves dotted path expressions like `details.age` or
//!   `matrix[1][0]` against a parsed tree, returning a reference into it.
//!
//! # Example
//!
//! ```
//! use jsonpick::document::parser::parse_json;
//! use jsonpick::query::resolve;
//! use jsonpick::document::node::JsonValue;
//!
//! let tree = parse_json(r#"{"details": {"age": 30}, "numbers": [1, 2, 3, 4]}"#).unwrap();
//!
//! let age = resolve(tree.root(), "details.age").unwrap();
//! assert!(matches!(age, JsonValue::Number(n) if *n == 30.0));
//!
//! assert!(resolve(tree.root(), "numbers[9]").is_none());
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod query;
pub mod render;
