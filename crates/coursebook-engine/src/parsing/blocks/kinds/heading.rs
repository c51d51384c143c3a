use crate::parsing::blocks::types::HeadingLevel;

/// Heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const H2_MARKER: &'static str = "## ";
    pub const H3_MARKER: &'static str = "### ";

    /// Detects a heading line, returning its level and the text after the
    /// marker. The text is not trimmed.
    pub fn detect(line: &str) -> Option<(HeadingLevel, &str)> {
        if let Some(text) = line.strip_prefix(Self::H2_MARKER) {
            return Some((HeadingLevel::H2, text));
        }
        line.strip_prefix(Self::H3_MARKER)
            .map(|text| (HeadingLevel::H3, text))
    }
}
