use std::sync::LazyLock;

use regex::Regex;

/// A backtick run holding at least one non-backtick character.
static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("invalid code span regex"));

/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": bold markers inside them stay literal.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";

    pub fn pattern() -> &'static Regex {
        &CODE_SPAN
    }

    /// Strips the delimiters from a complete code span run.
    pub fn inner(run: &str) -> Option<&str> {
        run.strip_prefix(Self::TICK)?.strip_suffix(Self::TICK)
    }
}
