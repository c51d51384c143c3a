//! # Inline Formatting
//!
//! Two-pass delimiter splitting over a single text run.
//!
//! ## Architecture
//!
//! Inline formatting is separate from block parsing. It runs on demand over
//! the raw text runs a block exposes through `Block::inline_runs`
//! (headings, paragraphs, list items, table cells, info boxes).
//!
//! 1. Split on complete code spans. Code spans are emitted as-is and never
//!    scanned again.
//! 2. Split every remaining prose segment on complete bold runs.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (PlainText, CodeSpan, Bold)
//! - **`kinds`**: delimiter owners (CodeSpan, Bold)
//! - **`parser`**: `format_inline()` entry point
//!
//! ## Raw Zone Precedence
//!
//! `` `**not bold**` `` formats as a single CodeSpan.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::format_inline;
pub use types::InlineSpan;
