/*!
# Token Paths

Dotted/bracketed addresses for flattened tokens, e.g. `hero.title` or
`faq.items[2].question`. A path is built up segment by segment while walking
the content tree and rendered on emission; fields join with `.`, array
indices render as `[n]`.
*/
use std::fmt;

/// A single step taken while walking a content tree.
#[derive(Hash, PartialEq, Eq, Debug, Clone)]
pub enum Segment {
    /// An object field, e.g. "title" in `hero.title`
    Field(String),
    /// An array index, e.g. the `[2]` in `items[2]`
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, "{name}"),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// The address a token will be stored under inside its token set.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct TokenPath {
    segments: Vec<Segment>,
}

impl TokenPath {
    /// Construct an empty path (the document root).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the path is still at the document root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Descend into an object field.
    pub fn push_field(&mut self, name: &str) {
        self.segments.push(Segment::Field(name.to_string()));
    }

    /// Descend into an array element.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    /// Step back out of the current segment.
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Render the key a token emitted at this path should be stored under.
    ///
    /// A trailing `value` field is dropped so that leaves wrapped as
    /// `{"value": ...}` land at the same key as their unwrapped form. The
    /// strip only applies when `value` is not the sole segment; a top-level
    /// `value` field is a real key.
    #[must_use]
    pub fn token_key(&self) -> String {
        let segments = match self.segments.split_last() {
            Some((Segment::Field(name), rest)) if name == "value" && !rest.is_empty() => rest,
            _ => &self.segments[..],
        };
        render(segments)
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(&self.segments))
    }
}

/// Join segments into the dotted/bracketed form. Indices attach directly to
/// the preceding segment; fields after the first are dot-separated.
fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 && matches!(segment, Segment::Field(_)) {
            out.push('.');
        }
        out.push_str(&segment.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_dotted_fields() {
        let mut path = TokenPath::new();
        path.push_field("hero");
        path.push_field("title");
        assert_eq!(path.to_string(), "hero.title");
    }

    #[test]
    fn renders_bracketed_indices() {
        let mut path = TokenPath::new();
        path.push_field("items");
        path.push_index(2);
        path.push_field("question");
        assert_eq!(path.to_string(), "items[2].question");
    }

    #[test]
    fn index_at_root_has_no_dot() {
        let mut path = TokenPath::new();
        path.push_index(0);
        path.push_field("name");
        assert_eq!(path.to_string(), "[0].name");
    }

    #[test]
    fn token_key_strips_trailing_value_field() {
        let mut path = TokenPath::new();
        path.push_field("hero");
        path.push_field("value");
        assert_eq!(path.token_key(), "hero");
        // Display keeps the raw path.
        assert_eq!(path.to_string(), "hero.value");
    }

    #[test]
    fn token_key_keeps_sole_value_segment() {
        let mut path = TokenPath::new();
        path.push_field("value");
        assert_eq!(path.token_key(), "value");
    }

    #[test]
    fn token_key_keeps_interior_value_fields() {
        let mut path = TokenPath::new();
        path.push_field("value");
        path.push_field("label");
        assert_eq!(path.token_key(), "value.label");
    }

    #[test]
    fn pop_backs_out() {
        let mut path = TokenPath::new();
        path.push_field("a");
        path.push_field("b");
        path.pop();
        path.push_field("c");
        assert_eq!(path.to_string(), "a.c");
    }
}
