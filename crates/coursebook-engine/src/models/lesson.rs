use crate::parsing::{ParsedDoc, parse_document};

/// A single lesson: metadata plus its raw body in the lesson dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    /// One-line summary shown under the title.
    pub desc: String,
    /// Raw body as read from disk, untrimmed.
    pub content: String,
}

impl Lesson {
    /// The body with surrounding whitespace removed, ready for parsing.
    pub fn body(&self) -> &str {
        self.content.trim()
    }

    /// Parses the body. Not cached; callers that render repeatedly should
    /// memoize the result themselves.
    pub fn document(&self) -> ParsedDoc {
        parse_document(self.body())
    }
}
