//! One-line rendering of resolved values.
//!
//! The output format here is a fixed contract: leaves print their payload,
//! containers print a summary with no contents, and a failed lookup prints
//! [`NOT_FOUND_MESSAGE`]. Number formatting defaults to two decimal places
//! but is configurable by the CLI.

use crate::document::node::JsonValue;

/// Default number of decimal places for rendering numbers.
pub const DEFAULT_PRECISION: usize = 2;

/// The fixed message for a lookup that resolved to nothing.
pub const NOT_FOUND_MESSAGE: &str = "Json value not found.";

/// Renders a value on one line with the default number precision.
///
/// # Example
///
/// ```
/// use jsonpick::document::node::JsonValue;
/// use jsonpick::render::describe;
///
/// assert_eq!(describe(&JsonValue::Number(30.0)), "Number: 30.00");
/// assert_eq!(describe(&JsonValue::Null), "Null");
/// ```
pub fn describe(value: &JsonValue) -> String {
    describe_with_precision(value, DEFAULT_PRECISION)
}

/// Renders a value on one line with the given number precision.
pub fn describe_with_precision(value: &JsonValue, precision: usize) -> String {
    match value {
        JsonValue::String(s) => format!("String: {}", s),
        JsonValue::Number(n) => format!("Number: {:.*}", precision, n),
        JsonValue::Boolean(b) => format!("Boolean: {}", b),
        JsonValue::Null => "Null".to_string(),
        JsonValue::Array(_) => "Array:".to_string(),
        JsonValue::Object(_) => "Object {...}".to_string(),
    }
}

/// Renders a lookup result, mapping `None` to the fixed not-found message.
pub fn describe_lookup(value: Option<&JsonValue>, precision: usize) -> String {
    match value {
        Some(value) => describe_with_precision(value, precision),
        None => NOT_FOUND_MESSAGE.to_string(),
    }
}
