use crate::parsing::lines::LineRange;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{CodeFence, OrderedList, UnorderedList, parse_table},
    types::{Block, BlockNode},
};

/// Single-pass block parser over a slice of lines.
///
/// Each step classifies the line at the cursor, consumes one or more lines
/// and emits at most one block. Blank lines are separators and emit nothing.
pub struct BlockBuilder<'a> {
    lines: &'a [&'a str],
    classifier: MarkdownLineClassifier,
    i: usize,
    out: Vec<BlockNode>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            classifier: MarkdownLineClassifier,
            i: 0,
            out: vec![],
        }
    }

    pub fn build(mut self) -> Vec<BlockNode> {
        while self.i < self.lines.len() {
            self.step();
        }
        self.out
    }

    fn step(&mut self) {
        let start = self.i;
        let line = self.lines[start];
        let next = self.lines.get(start + 1).copied();

        let block = match self.classifier.classify(line, next) {
            LineClass::Blank => {
                self.i += 1;
                return;
            }
            LineClass::Heading { level, text } => {
                self.i += 1;
                Block::Heading {
                    level,
                    text: text.to_string(),
                }
            }
            LineClass::FenceOpen { language } => self.consume_fence(language),
            LineClass::TableHeader => {
                let parsed = parse_table(self.lines, start);
                // Lookahead guarantees header and separator are both present.
                self.i += parsed.consumed.max(1);
                Block::Table(parsed.table)
            }
            LineClass::InfoBox { kind, text } => {
                self.i += 1;
                Block::InfoBox {
                    kind,
                    text: text.to_string(),
                }
            }
            LineClass::UnorderedItem(_) => Block::UnorderedList {
                items: self.consume_items(UnorderedList::item),
            },
            LineClass::OrderedItem(_) => Block::OrderedList {
                items: self.consume_items(OrderedList::item),
            },
            LineClass::Text(text) => {
                self.i += 1;
                Block::Paragraph {
                    text: text.to_string(),
                }
            }
        };

        self.out.push(BlockNode {
            block,
            lines: LineRange::new(start, self.i),
        });
    }

    /// Consumes the opening fence, every content line, and the closing fence
    /// if there is one. An unterminated fence runs to the end of input.
    fn consume_fence(&mut self, language: &str) -> Block {
        let source = self.lines;
        self.i += 1;
        let mut lines = vec![];
        while let Some(line) = source.get(self.i) {
            self.i += 1;
            if CodeFence::closes(line) {
                break;
            }
            lines.push(line.to_string());
        }
        Block::CodeBlock {
            language: language.to_string(),
            lines,
        }
    }

    /// Greedily consumes consecutive lines accepted by `item`. A blank line or
    /// any other line ends the run.
    fn consume_items(&mut self, item: fn(&str) -> Option<&str>) -> Vec<String> {
        let source = self.lines;
        let mut items = vec![];
        while let Some(text) = source.get(self.i).and_then(|line| item(line)) {
            items.push(text.to_string());
            self.i += 1;
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::types::{HeadingLevel, InfoKind, Table};
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> Vec<BlockNode> {
        BlockBuilder::new(lines).build()
    }

    #[test]
    fn ranges_track_consumed_lines() {
        let nodes = build(&["## A", "", "```", "x", "```", "- a", "- b", "p"]);
        let ranges: Vec<_> = nodes.iter().map(|n| n.lines).collect();
        assert_eq!(
            ranges,
            vec![
                LineRange::new(0, 1),
                LineRange::new(2, 5),
                LineRange::new(5, 7),
                LineRange::new(7, 8),
            ]
        );
    }

    #[test]
    fn unterminated_fence_takes_rest_of_input() {
        let nodes = build(&["```sql", "SELECT 1;", "", "## not a heading"]);
        assert_eq!(nodes.len(), 1);
        assert_eq!(
            nodes[0].block,
            Block::CodeBlock {
                language: "sql".into(),
                lines: vec!["SELECT 1;".into(), "".into(), "## not a heading".into()],
            }
        );
        assert_eq!(nodes[0].lines, LineRange::new(0, 4));
    }

    #[test]
    fn fence_with_language_inside_block_does_not_close() {
        let nodes = build(&["```", "```js", "```"]);
        assert_eq!(
            nodes[0].block,
            Block::CodeBlock {
                language: "text".into(),
                lines: vec!["```js".into()],
            }
        );
    }

    #[test]
    fn empty_code_block() {
        let nodes = build(&["```bash", "```"]);
        assert_eq!(
            nodes[0].block,
            Block::CodeBlock {
                language: "bash".into(),
                lines: vec![],
            }
        );
    }

    #[test]
    fn blank_line_ends_a_list() {
        let nodes = build(&["- a", "", "- b"]);
        assert_eq!(nodes.len(), 2);
        assert!(matches!(&nodes[0].block, Block::UnorderedList { items } if items == &["a"]));
        assert!(matches!(&nodes[1].block, Block::UnorderedList { items } if items == &["b"]));
    }

    #[test]
    fn mixed_bullet_markers_share_one_list() {
        let nodes = build(&["- a", "* b", "- c"]);
        assert_eq!(
            nodes[0].block,
            Block::UnorderedList {
                items: vec!["a".into(), "b".into(), "c".into()],
            }
        );
    }

    #[test]
    fn numbered_list_followed_by_bullets_splits() {
        let nodes = build(&["1. one", "2. two", "- bullet"]);
        assert_eq!(
            nodes[0].block,
            Block::OrderedList {
                items: vec!["one".into(), "two".into()],
            }
        );
        assert_eq!(
            nodes[1].block,
            Block::UnorderedList {
                items: vec!["bullet".into()],
            }
        );
    }

    #[test]
    fn table_then_paragraph() {
        let nodes = build(&["| A |", "|---|", "| 1 |", "done"]);
        assert_eq!(
            nodes[0].block,
            Block::Table(Table {
                header_cells: vec!["A".into()],
                rows: vec![vec!["1".into()]],
            })
        );
        assert_eq!(nodes[0].lines, LineRange::new(0, 3));
        assert_eq!(
            nodes[1].block,
            Block::Paragraph {
                text: "done".into()
            }
        );
    }

    #[test]
    fn every_construct_once() {
        let nodes = build(&[
            "## H2",
            "### H3",
            "> \u{26A0}\u{FE0F} careful",
            "1. first",
            "text",
        ]);
        let blocks: Vec<_> = nodes.into_iter().map(|n| n.block).collect();
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: HeadingLevel::H2,
                    text: "H2".into()
                },
                Block::Heading {
                    level: HeadingLevel::H3,
                    text: "H3".into()
                },
                Block::InfoBox {
                    kind: InfoKind::Warning,
                    text: "careful".into()
                },
                Block::OrderedList {
                    items: vec!["first".into()]
                },
                Block::Paragraph {
                    text: "text".into()
                },
            ]
        );
    }
}
