use serde::Serialize;

/// A half-open range `[start, end)` of zero-based source line indices.
///
/// Every parsed block records the lines it consumed, which lets tests
/// check that no non-blank line is lost or claimed twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LineRange {
    /// Index of the first line in the range.
    pub start: usize,
    /// Index one past the last line in the range.
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the number of lines. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Splits source text into lines, dropping `\n` and `\r\n` terminators.
///
/// A trailing newline does not produce a final empty line.
pub fn split_lines(source: &str) -> Vec<&str> {
    source.lines().collect()
}

/// A line is blank when it holds nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
