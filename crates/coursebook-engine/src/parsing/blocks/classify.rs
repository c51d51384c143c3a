use crate::parsing::lines::is_blank;

use super::{
    kinds::{CodeFence, Heading, InfoBox, OrderedList, PipeTable, UnorderedList},
    types::{HeadingLevel, InfoKind},
};

/// What a single line opens, decided from the line and one line of lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Heading { level: HeadingLevel, text: &'a str },
    FenceOpen { language: &'a str },
    /// Header line of a pipe table (the next line is a separator).
    TableHeader,
    InfoBox { kind: InfoKind, text: &'a str },
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    /// Anything else; becomes a paragraph.
    Text(&'a str),
}

/// Classifies lines for the block parser.
///
/// Classifiers run in a fixed order and the first match wins:
/// blank, heading, fence, table, info box, bullet item, numbered item, text.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, line: &'a str, next: Option<&str>) -> LineClass<'a> {
        if is_blank(line) {
            return LineClass::Blank;
        }
        if let Some((level, text)) = Heading::detect(line) {
            return LineClass::Heading { level, text };
        }
        if let Some(language) = CodeFence::open(line) {
            return LineClass::FenceOpen { language };
        }
        if PipeTable::opens(line, next) {
            return LineClass::TableHeader;
        }
        if let Some((kind, text)) = InfoBox::detect(line) {
            return LineClass::InfoBox { kind, text };
        }
        if let Some(item) = UnorderedList::item(line) {
            return LineClass::UnorderedItem(item);
        }
        if let Some(item) = OrderedList::item(line) {
            return LineClass::OrderedItem(item);
        }
        LineClass::Text(line)
    }
}
