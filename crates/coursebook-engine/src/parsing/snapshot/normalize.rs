use std::fmt::Write;

use crate::parsing::{
    blocks::{Block, BlockNode},
    inline::InlineSpan,
    parse_inline_for_block,
};

/// Renders parsed blocks as a readable outline for snapshot tests.
///
/// One header line per block (`range kind detail`), list items and table rows
/// indented below it, and a `~` line for every text run that carries inline
/// formatting. Trailing whitespace is trimmed from every line.
pub fn outline(blocks: &[BlockNode]) -> String {
    let mut lines = vec![];
    for node in blocks {
        let range = node.lines;
        match &node.block {
            Block::Heading { level, text } => {
                lines.push(format!("{range} Heading(H{}) {text}", level.as_u8()));
            }
            Block::CodeBlock { language, lines: code } => {
                lines.push(format!("{range} CodeBlock({language}) {}", count(code.len(), "line")));
            }
            Block::Table(table) => {
                lines.push(format!(
                    "{range} Table [{}] {}",
                    table.header_cells.join(" | "),
                    count(table.rows.len(), "row")
                ));
                for row in &table.rows {
                    lines.push(format!("    | {} |", row.join(" | ")));
                }
            }
            Block::InfoBox { kind, text } => {
                lines.push(format!("{range} InfoBox({kind:?}) {text}"));
            }
            Block::UnorderedList { items } => {
                lines.push(format!("{range} UnorderedList"));
                lines.extend(items.iter().map(|item| format!("    - {item}")));
            }
            Block::OrderedList { items } => {
                lines.push(format!("{range} OrderedList"));
                lines.extend(
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| format!("    {}. {item}", i + 1)),
                );
            }
            Block::Paragraph { text } => {
                lines.push(format!("{range} Paragraph {text}"));
            }
        }

        for spans in parse_inline_for_block(&node.block) {
            if spans.iter().any(|s| !matches!(s, InlineSpan::PlainText(_))) {
                lines.push(format!("    ~ {}", describe_spans(&spans)));
            }
        }
    }

    lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

fn describe_spans(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        // Writing to a String cannot fail.
        let _ = match span {
            InlineSpan::PlainText(t) => write!(out, "{t}"),
            InlineSpan::CodeSpan(t) => write!(out, "{{c:{t}}}"),
            InlineSpan::Bold(t) => write!(out, "{{b:{t}}}"),
        };
    }
    out
}
