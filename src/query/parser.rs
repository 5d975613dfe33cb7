//! Path expression tokenizer.

use super::ast::{JsonPath, PathSegment};
use super::error::PathError;

/// Parser for path expression strings.
pub struct Parser {
    input: String,
    position: usize,
}

impl Parser {
    /// Creates a new parser for the given path string.
    pub fn new(path: &str) -> Self {
        Self {
            input: path.to_string(),
            position: 0,
        }
    }

    /// Parses the path string into a [`JsonPath`].
    pub fn parse(path: &str) -> Result<JsonPath, PathError> {
        let mut parser = Parser::new(path);
        parser.parse_path()
    }

    fn parse_path(&mut self) -> Result<JsonPath, PathError> {
        if self.input.is_empty() {
            return Err(PathError::EmptyPath);
        }

        let mut segments = Vec::new();

        loop {
            // segment := name? ('[' digits ']')*
            if let Some(name) = self.parse_name() {
                segments.push(PathSegment::Key(name));
            }

            while self.peek() == Some('[') {
                let index = self.parse_index()?;
                segments.push(PathSegment::Index(index));
            }

            match self.peek() {
                Some('.') => {
                    self.next();
                }
                None => break,
                Some(found) => {
                    // A name on the far side of brackets, e.g. "a[0]b".
                    return Err(PathError::UnexpectedToken {
                        position: self.position,
                        found,
                    });
                }
            }
        }

        Ok(JsonPath::new(segments))
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Parses a field name: everything up to the next `.` or `[`.
    ///
    /// Returns `None` for an empty name, which lets bracketed indices apply
    /// to the current value without consuming a key.
    fn parse_name(&mut self) -> Option<String> {
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch == '.' || ch == '[' {
                break;
            }
            name.push(ch);
            self.next();
        }
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Parses one bracketed index: `[` digits `]`.
    ///
    /// The bracket contents must be entirely ASCII digits; signs, spaces,
    /// and trailing characters are all invalid.
    fn parse_index(&mut self) -> Result<usize, PathError> {
        let open = self.position;
        self.next(); // '['

        let start = self.position;
        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if ch == ']' {
                break;
            }
            digits.push(ch);
            self.next();
        }

        if self.peek() != Some(']') {
            return Err(PathError::UnclosedBracket { position: open });
        }
        self.next(); // ']'

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PathError::InvalidIndex {
                position: start,
                text: digits,
            });
        }

        digits.parse::<usize>().map_err(|_| PathError::InvalidIndex {
            position: start,
            text: digits.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_key() {
        let path = Parser::parse("active").unwrap();
        assert_eq!(path.segments, vec![PathSegment::Key("active".to_string())]);
    }

    #[test]
    fn test_parse_nested_keys() {
        let path = Parser::parse("details.age").unwrap();
        assert_eq!(
            path.segments,
            vec![
                PathSegment::Key("details".to_string()),
                PathSegment::Key("age".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_key_with_index() {
        let path = Parser::parse("numbers[3]").unwrap();
        assert_eq!(
            path.segments,
            vec![
                PathSegment::Key("numbers".to_string()),
                PathSegment::Index(3),
            ]
        );
    }

    #[test]
    fn test_parse_chained_indices() {
        let path = Parser::parse("matrix[10][20]").unwrap();
        assert_eq!(
            path.segments,
            vec![
                PathSegment::Key("matrix".to_string()),
                PathSegment::Index(10),
                PathSegment::Index(20),
            ]
        );
    }

    #[test]
    fn test_parse_index_then_key() {
        let path = Parser::parse("items[0].name").unwrap();
        assert_eq!(
            path.segments,
            vec![
                PathSegment::Key("items".to_string()),
                PathSegment::Index(0),
                PathSegment::Key("name".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_leading_index_without_name() {
        let path = Parser::parse("[0]").unwrap();
        assert_eq!(path.segments, vec![PathSegment::Index(0)]);
    }

    #[test]
    fn test_parse_empty_fails() {
        assert_eq!(Parser::parse(""), Err(PathError::EmptyPath));
    }

    #[test]
    fn test_parse_negative_index_fails() {
        let result = Parser::parse("items[-1]");
        assert!(matches!(result, Err(PathError::InvalidIndex { .. })));
    }

    #[test]
    fn test_parse_empty_brackets_fail() {
        let result = Parser::parse("items[]");
        assert!(matches!(result, Err(PathError::InvalidIndex { .. })));
    }

    #[test]
    fn test_parse_non_digit_index_fails() {
        for path in ["items[x]", "items[1x]", "items[1 ]"] {
            let result = Parser::parse(path);
            assert!(
                matches!(result, Err(PathError::InvalidIndex { .. })),
                "path: {}",
                path
            );
        }
    }

    #[test]
    fn test_parse_unclosed_bracket_fails() {
        let result = Parser::parse("items[1");
        assert!(matches!(result, Err(PathError::UnclosedBracket { .. })));
    }

    #[test]
    fn test_parse_name_after_brackets_fails() {
        let result = Parser::parse("a[0]b");
        assert!(matches!(result, Err(PathError::UnexpectedToken { .. })));
    }

    #[test]
    fn test_parse_consecutive_dots_skip_empty_segments() {
        let path = Parser::parse("a..b").unwrap();
        assert_eq!(
            path.segments,
            vec![
                PathSegment::Key("a".to_string()),
                PathSegment::Key("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_trailing_dot() {
        let path = Parser::parse("a.").unwrap();
        assert_eq!(path.segments, vec![PathSegment::Key("a".to_string())]);
    }
}
