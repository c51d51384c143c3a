use std::sync::LazyLock;

use regex::Regex;

/// A double-asterisk run holding at least one non-asterisk character.
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*").expect("invalid bold regex"));

/// Bold inline type with owned delimiter constant.
pub struct Bold;

impl Bold {
    pub const STARS: &'static str = "**";

    pub fn pattern() -> &'static Regex {
        &BOLD
    }

    /// Strips the delimiters from a complete bold run.
    pub fn inner(run: &str) -> Option<&str> {
        run.strip_prefix(Self::STARS)?.strip_suffix(Self::STARS)
    }
}
