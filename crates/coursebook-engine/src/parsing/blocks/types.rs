use serde::Serialize;

use crate::parsing::lines::LineRange;

/// Heading depth. The dialect only has second and third level headings;
/// the lesson title itself plays the role of the first level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

/// Flavour of a call-out box.
///
/// Only warnings exist in lesson content today. Consumers must keep a
/// fallback arm so new kinds can be added without touching call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum InfoKind {
    Warning,
}

/// A pipe table: one header row plus zero or more data rows.
///
/// Rows are not padded or truncated to the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header_cells: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A top-level structural unit of a lesson body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: HeadingLevel,
        text: String,
    },
    /// Fenced code. `lines` are verbatim, never inline formatted.
    CodeBlock {
        language: String,
        lines: Vec<String>,
    },
    Table(Table),
    InfoBox {
        kind: InfoKind,
        text: String,
    },
    UnorderedList {
        items: Vec<String>,
    },
    OrderedList {
        items: Vec<String>,
    },
    /// A single source line that matched no other construct.
    Paragraph {
        text: String,
    },
}

impl Block {
    /// Short variant name, used by outlines and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::CodeBlock { .. } => "CodeBlock",
            Block::Table(_) => "Table",
            Block::InfoBox { .. } => "InfoBox",
            Block::UnorderedList { .. } => "UnorderedList",
            Block::OrderedList { .. } => "OrderedList",
            Block::Paragraph { .. } => "Paragraph",
        }
    }

    /// Every raw text run of this block that should go through inline
    /// formatting, in reading order.
    ///
    /// Table runs are the header cells followed by each row's cells.
    /// Code blocks have none.
    pub fn inline_runs(&self) -> Vec<&str> {
        match self {
            Block::Heading { text, .. }
            | Block::InfoBox { text, .. }
            | Block::Paragraph { text } => vec![text.as_str()],
            Block::UnorderedList { items } | Block::OrderedList { items } => {
                items.iter().map(String::as_str).collect()
            }
            Block::Table(table) => table
                .header_cells
                .iter()
                .chain(table.rows.iter().flatten())
                .map(String::as_str)
                .collect(),
            Block::CodeBlock { .. } => vec![],
        }
    }
}

/// A parsed block together with the source lines it consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub block: Block,
    /// Lines consumed, including syntax-only lines such as fences and
    /// table separators.
    pub lines: LineRange,
}
