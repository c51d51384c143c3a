//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` TICK = "`" ``, raw zone that suppresses bold parsing
//! - **`Bold`**: `STARS = "**"`
//!
//! The parser calls these constants and patterns; it never hardcodes
//! `` ` `` or `**`.

pub mod bold;
pub mod code_span;

pub use bold::Bold;
pub use code_span::CodeSpan;
