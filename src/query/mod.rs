//! Path expression parser and resolver for point queries.
//!
//! This module resolves dotted path expressions against a parsed document,
//! returning a reference to the matching value or nothing.
//!
//! # Supported syntax
//!
//! - `property` - named field access on an object
//! - `a.b.c` - nested field access
//! - `items[0]` - array index after a field name
//! - `matrix[1][0]` - chained indices for nested arrays
//! - `[0]` - indices without a field name apply to the current value
//!
//! # Example
//!
//! ```
//! use jsonpick::document::parser::parse_json;
//! use jsonpick::query::resolve;
//!
//! let tree = parse_json(r#"{"numbers": [1, 2, 3, 4]}"#).unwrap();
//! let fourth = resolve(tree.root(), "numbers[3]").unwrap();
//! assert_eq!(fourth.as_f64(), Some(4.0));
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod resolver;

pub use ast::{JsonPath, PathSegment};
pub use error::PathError;
pub use parser::Parser;
pub use resolver::{resolve, Resolver};
