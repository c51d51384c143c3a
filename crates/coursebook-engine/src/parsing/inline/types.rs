use serde::Serialize;

use super::kinds::{Bold, CodeSpan};

/// A formatted run of text within a block.
///
/// Text is owned and has its delimiters stripped; see [`InlineSpan::to_source`]
/// to get them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Text that isn't part of any special construct.
    PlainText(String),
    /// Content between a pair of single backticks. Never re-parsed.
    CodeSpan(String),
    /// Content between a pair of `**`.
    Bold(String),
}

impl InlineSpan {
    /// The span's text without delimiters.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::PlainText(t) | InlineSpan::CodeSpan(t) | InlineSpan::Bold(t) => t,
        }
    }

    /// The span as it appeared in the source, delimiters included.
    pub fn to_source(&self) -> String {
        match self {
            InlineSpan::PlainText(t) => t.clone(),
            InlineSpan::CodeSpan(t) => format!("{tick}{t}{tick}", tick = CodeSpan::TICK),
            InlineSpan::Bold(t) => format!("{stars}{t}{stars}", stars = Bold::STARS),
        }
    }
}
