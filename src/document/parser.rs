//! Recursive descent JSON parser.
//!
//! This module parses JSON text into a [`JsonTree`] without any external
//! parsing machinery: a byte cursor walks the input once, and mutually
//! recursive readers build the value tree bottom-up. Partially built
//! containers on an error path are dropped by ownership, so a failed parse
//! never returns or leaks a partial tree.
//!
//! The grammar is deliberately lenient in two places, preserved from the
//! tool this parser replaces: containers tolerate a trailing comma before
//! the closing delimiter, and the colon after an object key is skipped if
//! present rather than required.
//!
//! # Example
//!
//! ```
//! use jsonpick::document::parser::parse_json;
//! use jsonpick::document::node::JsonValue;
//!
//! let tree = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert!(tree.root().is_object());
//!
//! assert!(parse_json(r#"{"unclosed": "#).is_err());
//! ```

use std::fmt;

use super::node::JsonValue;
use super::tree::JsonTree;

/// Containers reserve this many slots up front; `Vec` doubles from there.
const INITIAL_CONTAINER_CAPACITY: usize = 8;

/// Errors produced while parsing JSON text.
///
/// All variants carry the byte offset where the problem was detected. A
/// parse either succeeds completely or fails with one of these; there is no
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A string ran to end of input without an unescaped closing quote.
    UnterminatedString { position: usize },
    /// A backslash escape other than `\" \\ \/ \b \f \n \r \t`.
    InvalidEscape { position: usize, found: char },
    /// A raw control byte (< 0x20) inside a string.
    ControlCharacter { position: usize, byte: u8 },
    /// A numeric token the float parser rejected, or a non-finite result.
    InvalidNumber { position: usize, text: String },
    /// A byte that cannot start a value, or garbage inside a container.
    UnexpectedByte { position: usize, found: char },
    /// Input ended where a value or closing delimiter was required.
    UnexpectedEnd,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnterminatedString { position } => {
                write!(f, "Unterminated string starting at byte {}", position)
            }
            ParseError::InvalidEscape { position, found } => {
                write!(f, "Invalid escape '\\{}' at byte {}", found, position)
            }
            ParseError::ControlCharacter { position, byte } => {
                write!(
                    f,
                    "Raw control character 0x{:02x} in string at byte {}",
                    byte, position
                )
            }
            ParseError::InvalidNumber { position, text } => {
                write!(f, "Invalid number '{}' at byte {}", text, position)
            }
            ParseError::UnexpectedByte { position, found } => {
                write!(f, "Unexpected character '{}' at byte {}", found, position)
            }
            ParseError::UnexpectedEnd => write!(f, "Unexpected end of input"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Tracks the current read position while parsing.
struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the byte at the cursor without advancing.
    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Advances past `n` bytes.
    fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Skips space, tab, newline, and carriage return.
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Remaining unconsumed input.
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// The character at the cursor, for error reporting.
    fn current_char(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }
}

/// Parses a JSON string into a [`JsonTree`].
///
/// The top-level value may be any JSON value, not only an object. Trailing
/// input after the top-level value is left unconsumed, matching the cursor
/// semantics of the original tool.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is malformed. No partial tree is
/// ever returned; everything built before the failure is dropped.
pub fn parse_json(source: &str) -> Result<JsonTree, ParseError> {
    let root = parse_value(source)?;
    Ok(JsonTree::with_source(root, Some(source.to_string())))
}

/// Parses a JSON string into a bare [`JsonValue`], without tree bookkeeping.
pub fn parse_value(source: &str) -> Result<JsonValue, ParseError> {
    let mut cursor = Cursor::new(source);
    read_value(&mut cursor)
}

/// Reads one value at the cursor, dispatching on the first byte.
fn read_value(cursor: &mut Cursor) -> Result<JsonValue, ParseError> {
    cursor.skip_whitespace();

    let Some(byte) = cursor.peek() else {
        return Err(ParseError::UnexpectedEnd);
    };

    match byte {
        b'"' => read_string(cursor).map(JsonValue::String),
        b'-' | b'0'..=b'9' => read_number(cursor),
        b'{' => read_object(cursor),
        b'[' => read_array(cursor),
        // Keywords match by prefix; trailing garbage is the caller's problem.
        _ if cursor.rest().starts_with("true") => {
            cursor.advance(4);
            Ok(JsonValue::Boolean(true))
        }
        _ if cursor.rest().starts_with("false") => {
            cursor.advance(5);
            Ok(JsonValue::Boolean(false))
        }
        _ if cursor.rest().starts_with("null") => {
            cursor.advance(4);
            Ok(JsonValue::Null)
        }
        _ => Err(ParseError::UnexpectedByte {
            position: cursor.pos,
            found: cursor.current_char(),
        }),
    }
}

/// Reads a quoted string and decodes its escapes.
///
/// Scanning and decoding are separate passes. The first pass finds the
/// logical end of the string: a quote terminates it only when preceded by an
/// even number of backslashes. The second pass decodes the recognized
/// escapes into the output buffer; `\uXXXX` is not supported and fails.
fn read_string(cursor: &mut Cursor) -> Result<String, ParseError> {
    if cursor.peek() != Some(b'"') {
        return Err(ParseError::UnexpectedByte {
            position: cursor.pos,
            found: cursor.current_char(),
        });
    }
    cursor.advance(1); // opening quote

    let bytes = cursor.source.as_bytes();
    let start = cursor.pos;
    let mut scan = start;

    while scan < bytes.len() {
        if bytes[scan] == b'"' {
            let mut backslashes = 0;
            let mut prev = scan;
            while prev > start && bytes[prev - 1] == b'\\' {
                backslashes += 1;
                prev -= 1;
            }
            // Even count means the quote itself is not escaped.
            if backslashes % 2 == 0 {
                break;
            }
        }
        scan += 1;
    }

    if scan >= bytes.len() {
        return Err(ParseError::UnterminatedString { position: start - 1 });
    }

    let raw = &cursor.source[start..scan];
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();

    while let Some((offset, ch)) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some((_, '"')) => out.push('"'),
                Some((_, '\\')) => out.push('\\'),
                Some((_, '/')) => out.push('/'),
                Some((_, 'b')) => out.push('\u{0008}'),
                Some((_, 'f')) => out.push('\u{000C}'),
                Some((_, 'n')) => out.push('\n'),
                Some((_, 'r')) => out.push('\r'),
                Some((_, 't')) => out.push('\t'),
                Some((escape_offset, other)) => {
                    return Err(ParseError::InvalidEscape {
                        position: start + escape_offset,
                        found: other,
                    });
                }
                // Unreachable given the scan invariant, but stay total.
                None => return Err(ParseError::UnterminatedString { position: start - 1 }),
            }
        } else if (ch as u32) < 0x20 {
            return Err(ParseError::ControlCharacter {
                position: start + offset,
                byte: ch as u8,
            });
        } else {
            out.push(ch);
        }
    }

    cursor.pos = scan + 1; // skip closing quote
    Ok(out)
}

/// Reads a numeric token and converts it with the standard float parser.
///
/// The token boundary is determined by the float parser, not by the
/// grammar: the float byte class bounds the candidate span, and the token
/// is the longest prefix of it that `str::parse::<f64>` accepts, strtod
/// style. Whatever follows that prefix is left unconsumed for the caller
/// rather than rejected here.
fn read_number(cursor: &mut Cursor) -> Result<JsonValue, ParseError> {
    let start = cursor.pos;

    while let Some(byte) = cursor.peek() {
        if byte.is_ascii_digit() || matches!(byte, b'-' | b'+' | b'.' | b'e' | b'E') {
            cursor.advance(1);
        } else {
            break;
        }
    }

    let span = &cursor.source[start..cursor.pos];
    let mut len = span.len();
    while len > 0 {
        if let Ok(number) = span[..len].parse::<f64>() {
            // The byte class cannot spell "inf" or "nan", but an
            // overflowing exponent still parses to infinity.
            if !number.is_finite() {
                return Err(ParseError::InvalidNumber {
                    position: start,
                    text: span[..len].to_string(),
                });
            }
            cursor.pos = start + len;
            return Ok(JsonValue::Number(number));
        }
        len -= 1;
    }

    // No prefix parses, e.g. a bare "-".
    Err(ParseError::InvalidNumber {
        position: start,
        text: span.to_string(),
    })
}

/// Reads an array: `[` ws (value (ws `,` ws value)*)? ws `]`.
///
/// The loop re-checks the closing bracket before requiring another element,
/// which is what makes a trailing comma legal here.
fn read_array(cursor: &mut Cursor) -> Result<JsonValue, ParseError> {
    cursor.advance(1); // '['
    let mut elements = Vec::with_capacity(INITIAL_CONTAINER_CAPACITY);

    cursor.skip_whitespace();
    while !matches!(cursor.peek(), Some(b']') | None) {
        let value = read_value(cursor)?;
        elements.push(value);

        cursor.skip_whitespace();
        if cursor.peek() == Some(b',') {
            cursor.advance(1);
            cursor.skip_whitespace();
        }
    }

    match cursor.peek() {
        Some(b']') => {
            cursor.advance(1);
            Ok(JsonValue::Array(elements))
        }
        _ => Err(ParseError::UnexpectedEnd),
    }
}

/// Reads an object: `{` ws (pair (ws `,` ws pair)*)? ws `}`.
///
/// Keys must be strings. The colon after a key is skipped when present but
/// not required, and a trailing comma before `}` is tolerated.
fn read_object(cursor: &mut Cursor) -> Result<JsonValue, ParseError> {
    cursor.advance(1); // '{'
    let mut pairs: Vec<(String, JsonValue)> = Vec::with_capacity(INITIAL_CONTAINER_CAPACITY);

    cursor.skip_whitespace();
    while !matches!(cursor.peek(), Some(b'}') | None) {
        let key = read_string(cursor)?;

        cursor.skip_whitespace();
        if cursor.peek() == Some(b':') {
            cursor.advance(1);
        }

        let value = read_value(cursor)?;
        pairs.push((key, value));

        cursor.skip_whitespace();
        if cursor.peek() == Some(b',') {
            cursor.advance(1);
            cursor.skip_whitespace();
        }
    }

    match cursor.peek() {
        Some(b'}') => {
            cursor.advance(1);
            Ok(JsonValue::Object(pairs))
        }
        _ => Err(ParseError::UnexpectedEnd),
    }
}
