pub mod io;
pub mod models;
pub mod navigation;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use navigation::*;
pub use parsing::{
    ParsedDoc,
    blocks::{Block, BlockNode, HeadingLevel, InfoKind, Table},
    format_inline,
    inline::InlineSpan,
    parse_blocks, parse_document, parse_inline_for_block,
};
