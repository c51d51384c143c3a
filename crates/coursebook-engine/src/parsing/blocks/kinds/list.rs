use std::sync::LazyLock;

use regex::Regex;

/// Bullet list item markers.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    /// Returns the item text after the marker, if `line` is a bullet item.
    pub fn item(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }
}

/// `1. `, `2. `, `10. ` style item prefix. ASCII digits only.
static ORDERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("invalid ordered list regex"));

/// Numbered list item prefix.
pub struct OrderedList;

impl OrderedList {
    /// Returns the item text after the numeric prefix, if `line` is a
    /// numbered item. The number itself is discarded.
    pub fn item(line: &str) -> Option<&str> {
        ORDERED_PREFIX.find(line).map(|m| &line[m.end()..])
    }
}
