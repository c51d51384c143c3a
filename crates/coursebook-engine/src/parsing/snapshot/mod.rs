//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders parsed blocks as a stable, line-per-block
//!   outline for `insta` string snapshots
//! - **`invariants`**: runtime checks for parser correctness (line ranges in
//!   bounds and ordered, every non-blank line claimed by exactly one block,
//!   block content matching its source lines)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by outline snapshots of small fixtures, while
//! the invariant checker runs over every real lesson in the content tree.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
