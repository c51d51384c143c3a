//! # Block Parsing
//!
//! Single-pass, line-indexed block parsing with one line of lookahead.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): the line at the cursor (plus the
//!    next line, for tables) is mapped to a `LineClass`. Classifiers run in a
//!    fixed order and the first match wins.
//!
//! 2. **Block Construction** (`builder`): `BlockBuilder` turns the class into a
//!    `Block`, consuming as many lines as the construct needs (fences, tables
//!    and lists span several lines).
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockNode`, `HeadingLevel`, `InfoKind`, `Table`
//! - **`kinds`**: per-construct types that own their markers (Heading,
//!   CodeFence, PipeTable, InfoBox, UnorderedList, OrderedList)
//! - **`classify`**: `MarkdownLineClassifier` producing `LineClass`
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Every non-blank line ends up in exactly one block
//! - Blank lines are separators and never produce blocks
//! - Fenced code is a raw zone: its lines are copied verbatim
//! - Unrecognized lines become paragraphs; parsing never fails

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::{TableParse, parse_table};
pub use types::{Block, BlockNode, HeadingLevel, InfoKind, Table};
