pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, BlockNode};
use inline::InlineSpan;
use lines::split_lines;

pub use inline::format_inline;

/// A parsed lesson body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().map(|node| &node.block)
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks.into_iter().map(|node| node.block).collect()
    }
}

/// Parses a lesson body into blocks, keeping the source line range of each.
///
/// Pure and total: the same input always yields the same tree, and any line
/// no construct claims becomes a paragraph.
pub fn parse_document(source: &str) -> ParsedDoc {
    let lines = split_lines(source);
    ParsedDoc {
        blocks: BlockBuilder::new(&lines).build(),
    }
}

/// Parses a lesson body into blocks.
pub fn parse_blocks(source: &str) -> Vec<Block> {
    parse_document(source).into_blocks()
}

/// Convenience: inline formatting for every text run of a block, in the order
/// of [`Block::inline_runs`].
pub fn parse_inline_for_block(block: &Block) -> Vec<Vec<InlineSpan>> {
    block.inline_runs().into_iter().map(format_inline).collect()
}
