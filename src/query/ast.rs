//! Abstract syntax tree types for path expressions.

/// A single step in a path expression.
///
/// The surface grammar is `segment := name? ('[' digits ']')*` with segments
/// joined by dots; the parser flattens `name[i][j]` into
/// `Key(name), Index(i), Index(j)`, so the resolver only ever sees these two
/// step kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Named field access on an object (`details`, `age`)
    Key(String),
    /// Array index ([0], [12])
    Index(usize),
}

/// A complete parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    /// Flattened steps, applied left to right.
    pub segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates a path from the given segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}
