use regex::Regex;

use super::{
    kinds::{Bold, CodeSpan},
    types::InlineSpan,
};

/// Formats a raw text run into a sequence of [`InlineSpan`]s.
///
/// # Raw Zone Precedence
/// Code spans are split out first and suppress bold detection inside them.
///
/// # Returns
/// Spans in source order. Concatenating [`InlineSpan::to_source`] over the
/// result reproduces `text` exactly. Empty plain-text spans are never
/// emitted, and unterminated delimiters stay literal text.
pub fn format_inline(text: &str) -> Vec<InlineSpan> {
    let mut out = vec![];
    for segment in split_keeping(text, CodeSpan::pattern()) {
        match segment {
            Segment::Matched(run) => match CodeSpan::inner(run) {
                Some(code) => out.push(InlineSpan::CodeSpan(code.to_string())),
                None => format_prose(run, &mut out),
            },
            Segment::Unmatched(prose) => format_prose(prose, &mut out),
        }
    }
    out
}

/// Second pass: bold runs within a prose segment.
fn format_prose(prose: &str, out: &mut Vec<InlineSpan>) {
    for segment in split_keeping(prose, Bold::pattern()) {
        match segment {
            Segment::Matched(run) => match Bold::inner(run) {
                Some(bold) => out.push(InlineSpan::Bold(bold.to_string())),
                None => out.push(InlineSpan::PlainText(run.to_string())),
            },
            Segment::Unmatched(plain) => out.push(InlineSpan::PlainText(plain.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    /// A complete delimited run, delimiters included.
    Matched(&'a str),
    /// Text between runs. Never empty.
    Unmatched(&'a str),
}

/// Splits `text` around every non-overlapping match of `re`, keeping both the
/// matches and the text between them in order.
fn split_keeping<'a>(text: &'a str, re: &Regex) -> Vec<Segment<'a>> {
    let mut segments = vec![];
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Unmatched(&text[last..m.start()]));
        }
        segments.push(Segment::Matched(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::Unmatched(&text[last..]));
    }
    segments
}
